//! Inline HTML documents served by the resume route.

pub const INPUT_FORM_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Professional Resume Builder</title>
    <style>
        @import url('https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;700&display=swap');
        :root { --color-primary: #1a73e8; --color-text: #3c4043; --color-border: #dadce0; }
        body { font-family: 'Roboto', sans-serif; max-width: 800px; margin: 0 auto; padding: 40px 20px; color: var(--color-text); background-color: #f8f9fa; }
        form { background: white; padding: 30px; border-radius: 12px; box-shadow: 0 4px 12px rgba(0,0,0,0.1); border: 1px solid var(--color-border); }
        textarea { width: 100%; min-height: 200px; padding: 15px; box-sizing: border-box; border-radius: 8px; border: 1px solid var(--color-border); font-family: inherit; }
        button { background-color: var(--color-primary); color: white; padding: 15px; border: none; border-radius: 8px; width: 100%; cursor: pointer; font-size: 1.1em; margin-top: 20px; }
        h1 { color: var(--color-primary); text-align: center; }
    </style>
</head>
<body>
    <h1>Professional Resume Builder</h1>
    <form method="POST">
        <label><b>Enter your details:</b></label><br><br>
        <textarea name="user_description" required placeholder="Name, Contact, Experience, Skills..."></textarea>
        <button type="submit">✨ Generate Resume</button>
    </form>
</body>
</html>
"#;

const LINE_BREAK: &str = "<br>";

/// Replaces every `\n` with `<br>`. Nothing else is touched, including `\r`.
pub fn line_breaks_to_html(text: &str) -> String {
    text.replace('\n', LINE_BREAK)
}

/// Results document. Both arguments are embedded verbatim.
pub fn results_html(description: &str, resume: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Results</title>
    <style>
        body {{ font-family: sans-serif; max-width: 800px; margin: auto; padding: 20px; line-height: 1.6; }}
        pre {{ background: white; padding: 20px; border: 1px solid #ddd; border-radius: 8px; white-space: pre-wrap; }}
        .box {{ background: #fffde7; padding: 15px; border-left: 5px solid #fbbc05; margin-bottom: 20px; }}
    </style>
</head>
<body>
    <h1>🎉 Your Resume</h1>
    <div class="box"><b>Input:</b> {description}</div>
    <pre>{resume}</pre>
    <a href="/">Generate another</a>
</body>
</html>
"#
    )
}
