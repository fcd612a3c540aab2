//! HTML views rendered with minijinja.
//!
//! Templates are embedded strings registered under `.html` names so the
//! engine's auto-escaping applies to everything interpolated into them.

use minijinja::{context, Environment};

use crate::RenderError;

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>MCQ Generator</title>
</head>
<body>
  <h1>Generate MCQs from a document</h1>
  <form action="/generate" method="post" enctype="multipart/form-data">
    <p><input type="file" name="file" accept=".pdf,.txt,.docx" required></p>
    <p>
      <label for="num_questions">Number of questions:</label>
      <input type="number" id="num_questions" name="num_questions" value="5" min="1">
    </p>
    <p><button type="submit">Generate</button></p>
  </form>
  <p>Supported formats: PDF, DOCX, TXT (max 16 MiB).</p>
</body>
</html>
"#;

const RESULTS_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Generated MCQs</title>
</head>
<body>
  <h1>Generated MCQs</h1>
  <pre>{{ mcqs }}</pre>
  <p>Document: <a href="/download/{{ pdf_filename }}">{{ pdf_filename }}</a></p>
  <p><a href="/">Generate another</a></p>
</body>
</html>
"#;

fn build_env() -> Environment<'static> {
    let mut env = Environment::new();
    // Template registration cannot fail for these static strings.
    env.add_template("index.html", INDEX_TEMPLATE)
        .expect("index template is valid");
    env.add_template("results.html", RESULTS_TEMPLATE)
        .expect("results template is valid");
    env
}

/// The upload form view.
pub fn index_page() -> Result<String, RenderError> {
    let env = build_env();
    env.get_template("index.html")
        .and_then(|t| t.render(context! {}))
        .map_err(|e| RenderError::Template(e.to_string()))
}

/// The results view embedding the raw generated text and a reference to
/// the generated document.
pub fn results_page(mcqs: &str, pdf_filename: &str) -> Result<String, RenderError> {
    let env = build_env();
    env.get_template("results.html")
        .and_then(|t| {
            t.render(context! {
                mcqs => mcqs,
                pdf_filename => pdf_filename,
            })
        })
        .map_err(|e| RenderError::Template(e.to_string()))
}
