/// Static page served at `GET /`
///
/// A URL form that posts to `/api/clean` and renders the JSON result.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Text Preprocessing Service</title>
<style>
  body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
  input[type=url] { width: 100%; padding: 0.5rem; box-sizing: border-box; }
  button { margin-top: 0.5rem; padding: 0.5rem 1rem; }
  pre { background: #f4f4f4; padding: 1rem; white-space: pre-wrap; word-wrap: break-word; }
  .error { color: #b00020; }
</style>
</head>
<body>
<h1>Text Preprocessing Service</h1>
<p>Enter the URL of a plain-text (<code>.txt</code>) document, for example a Project Gutenberg book.</p>
<form id="clean-form">
  <input type="url" id="url" placeholder="https://www.gutenberg.org/files/1342/1342-0.txt" required>
  <button type="submit">Clean text</button>
</form>
<div id="result"></div>
<script>
document.getElementById('clean-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const result = document.getElementById('result');
  result.textContent = 'Processing...';
  try {
    const response = await fetch('/api/clean', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ url: document.getElementById('url').value })
    });
    const data = await response.json();
    result.innerHTML = '';
    if (!data.success) {
      const p = document.createElement('p');
      p.className = 'error';
      p.textContent = data.error;
      result.appendChild(p);
      return;
    }
    const sections = [
      ['Statistics', JSON.stringify(data.statistics, null, 2)],
      ['Summary', data.summary.join('\n\n')],
      ['Cleaned text (first 2000 characters)', data.cleaned_text.slice(0, 2000)]
    ];
    for (const [title, body] of sections) {
      const h = document.createElement('h2');
      h.textContent = title;
      const pre = document.createElement('pre');
      pre.textContent = body;
      result.append(h, pre);
    }
  } catch (err) {
    result.textContent = 'Request failed: ' + err;
  }
});
</script>
</body>
</html>
"#;
