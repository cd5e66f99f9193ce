// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Embedded console page

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>cqlweb</title>
<link rel="stylesheet" href="/static/console.css">
<style>
  body { margin: 0; font-family: sans-serif; display: flex; height: 100vh; }
  #schema { width: 260px; overflow: auto; border-right: 1px solid #ccc; padding: 8px; font-size: 13px; }
  #schema details { margin-left: 8px; }
  #schema .col { margin-left: 24px; color: #444; }
  #schema .kind { color: #999; font-size: 11px; }
  #main { flex: 1; display: flex; flex-direction: column; padding: 8px; }
  #query { width: 100%; height: 120px; font-family: monospace; }
  #status { color: #a00; margin: 6px 0; min-height: 1em; }
  #results { flex: 1; overflow: auto; }
  table { border-collapse: collapse; font-family: monospace; font-size: 12px; }
  th, td { border: 1px solid #ddd; padding: 2px 6px; text-align: left; }
  th { background: #f4f4f4; }
</style>
</head>
<body>
<div id="schema">loading schema...</div>
<div id="main">
  <textarea id="query" placeholder="SELECT * FROM keyspace.table LIMIT 10"></textarea>
  <div><button id="run">Run</button> <small>Ctrl+Enter</small></div>
  <div id="status"></div>
  <div id="results"></div>
</div>
<script>
const el = (tag, text, cls) => {
  const e = document.createElement(tag);
  if (text !== undefined) e.textContent = text;
  if (cls) e.className = cls;
  return e;
};

function cell(v) {
  if (v === null || v === undefined) return "";
  return typeof v === "object" ? JSON.stringify(v) : String(v);
}

function renderRows(rows) {
  const out = document.getElementById("results");
  out.innerHTML = "";
  if (!rows.length) { out.textContent = "(no rows)"; return; }
  const cols = Object.keys(rows[0]);
  const table = el("table");
  const head = el("tr");
  cols.forEach(c => head.appendChild(el("th", c)));
  table.appendChild(head);
  rows.forEach(r => {
    const tr = el("tr");
    cols.forEach(c => tr.appendChild(el("td", cell(r[c]))));
    table.appendChild(tr);
  });
  out.appendChild(table);
}

async function run() {
  const status = document.getElementById("status");
  status.textContent = "";
  const body = new URLSearchParams({ query: document.getElementById("query").value });
  const resp = await fetch("/api/cql", { method: "POST", body });
  const data = await resp.json();
  if (data.status === "error") { status.textContent = data.message; return; }
  renderRows(data);
}

async function loadSchema() {
  const pane = document.getElementById("schema");
  const resp = await fetch("/api/meta");
  const data = await resp.json();
  pane.innerHTML = "";
  if (data.status === "error") { pane.textContent = data.message; return; }
  Object.entries(data).forEach(([ks, tables]) => {
    const k = el("details");
    k.appendChild(el("summary", ks));
    Object.entries(tables).forEach(([name, columns]) => {
      const t = el("details");
      const s = el("summary", name);
      s.ondblclick = () => {
        document.getElementById("query").value = `SELECT * FROM ${ks}.${name} LIMIT 100`;
      };
      t.appendChild(s);
      Object.entries(columns).forEach(([col, info]) => {
        const c = el("div", `${col} ${info.type} `, "col");
        c.appendChild(el("span", info.kind, "kind"));
        t.appendChild(c);
      });
      k.appendChild(t);
    });
    pane.appendChild(k);
  });
}

document.getElementById("run").onclick = run;
document.getElementById("query").addEventListener("keydown", e => {
  if (e.key === "Enter" && e.ctrlKey) run();
});
loadSchema();
</script>
</body>
</html>
"#;
