/// Self-contained admin page served at `/`.
///
/// Four forms drive the JSON API: create, download, update summary, delete.
pub(crate) const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>Document Manager</title>
<style>
  body { font-family: sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; }
  fieldset { margin-bottom: 1.25rem; border: 1px solid #ccc; border-radius: 4px; }
  input, textarea, button { display: block; width: 100%; margin: 0.4rem 0; padding: 0.5rem; box-sizing: border-box; }
  button { cursor: pointer; }
  #result { background: #f4f4f4; padding: 0.75rem; white-space: pre-wrap; border-radius: 4px; }
</style>
</head>
<body>
<h1>Document Manager</h1>

<fieldset>
  <legend>Create document</legend>
  <input id="create-number" placeholder="Document number" />
  <input id="create-date" type="date" />
  <textarea id="create-summary" placeholder="Summary"></textarea>
  <button id="create-btn">Create</button>
</fieldset>

<fieldset>
  <legend>Download document</legend>
  <input id="download-number" placeholder="Document number" />
  <button id="download-btn">Download</button>
</fieldset>

<fieldset>
  <legend>Update summary</legend>
  <input id="update-number" placeholder="Document number" />
  <textarea id="update-summary" placeholder="New summary"></textarea>
  <button id="update-btn">Update</button>
</fieldset>

<fieldset>
  <legend>Delete document</legend>
  <input id="delete-number" placeholder="Document number" />
  <button id="delete-btn">Delete</button>
</fieldset>

<h2>Result</h2>
<pre id="result">Nothing yet.</pre>

<script>
const api = '/documents';
const field = (id) => document.getElementById(id).value;
const show = (text) => { document.getElementById('result').textContent = text; };
const docUrl = (number) => `${api}/${encodeURIComponent(number)}`;

async function report(response) {
  const data = await response.json();
  if (response.ok) {
    show(data.message || JSON.stringify(data, null, 2));
  } else {
    show(`Error ${response.status}: ${data.error}`);
  }
}

document.getElementById('create-btn').onclick = async () => {
  const body = {
    number: field('create-number'),
    creation_date: field('create-date'),
    summary: field('create-summary'),
  };
  if (!body.number || !body.creation_date || !body.summary) {
    return show('Number, creation date and summary are all required.');
  }
  await report(await fetch(api, {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(body),
  }));
};

document.getElementById('download-btn').onclick = async () => {
  const number = field('download-number');
  if (!number) return show('Enter a document number.');
  const response = await fetch(`${docUrl(number)}/download`);
  if (!response.ok) return report(response);
  const link = document.createElement('a');
  link.href = URL.createObjectURL(await response.blob());
  link.download = `${number}_document.txt`;
  document.body.appendChild(link);
  link.click();
  URL.revokeObjectURL(link.href);
  link.remove();
  show(`Document ${number} downloaded.`);
};

document.getElementById('update-btn').onclick = async () => {
  const number = field('update-number');
  const summary = field('update-summary');
  if (!number || !summary) return show('Enter a document number and a new summary.');
  await report(await fetch(docUrl(number), {
    method: 'PUT',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ summary }),
  }));
};

document.getElementById('delete-btn').onclick = async () => {
  const number = field('delete-number');
  if (!number) return show('Enter a document number.');
  await report(await fetch(docUrl(number), { method: 'DELETE' }));
};
</script>
</body>
</html>
"#;
