//! Built-in demo document for `--sample`.

/// A small self-contained page whose prose, style rules, and attributes
/// give the query and selector flags something to bite on.
pub const SAMPLE_DOCUMENT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Sample Page</title>
    <style>
        body { font-family: sans-serif; padding: 1rem; }
        .container { max-width: 800px; margin: auto; padding: 20px; }
        .highlight { background-color: yellow; }
        button { border: 1px solid #ccc; padding: 5px 10px; border-radius: 4px; cursor: pointer; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Welcome to the Live Preview!</h1>
        <p>This is a sample paragraph. You can search for any text, like "paragraph" or "container" to see the highlight feature in action.</p>
        <div id="main-content">
            <p>Your HTML and inline CSS will render here.</p>
            <button class="highlight" onclick="alert('JavaScript works too!')">A highlighted button</button>
        </div>
    </div>
</body>
</html>
"#;
