pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #05090f;
  --bg-elev-1: #0b111a;
  --bg-elev-2: #111a26;
  --panel: #0d1520;
  --border: rgba(255, 255, 255, 0.08);
  --border-strong: rgba(255, 255, 255, 0.16);
  --text: #e6edf7;
  --text-dim: #b7c6d9;
  --text-muted: #7f8ba0;
  --accent: #5cb0ff;
  --accent-strong: #7ac6ff;
  --negative: #f0635c;
  --shadow-soft: 0 14px 42px rgba(0, 0, 0, 0.38);
  --radius: 10px;
  --radius-pill: 999px;
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --font-body: "Inter", "SF Pro Text", system-ui, -apple-system, sans-serif;
  --font-mono: "JetBrains Mono", "SFMono-Regular", ui-monospace, monospace;
  --font-size-xs: 11px;
  --font-size-sm: 13px;
  --font-size-md: 15px;
  --font-size-lg: 17px;
  --transition: 140ms ease-out;
}

.light-theme {
  --bg: #f8fbff;
  --bg-elev-1: #ffffff;
  --bg-elev-2: #edf1f7;
  --panel: #ffffff;
  --border: rgba(0, 0, 0, 0.06);
  --border-strong: rgba(0, 0, 0, 0.12);
  --text: #0c1625;
  --text-dim: #2c3a4f;
  --text-muted: #5b6678;
  --accent: #2563eb;
  --accent-strong: #1d4ed8;
  --negative: #e11d48;
  --shadow-soft: 0 10px 36px rgba(0, 0, 0, 0.14);
}

* { box-sizing: border-box; }
html, body {
  padding: 0;
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-body);
  font-size: var(--font-size-sm);
  line-height: 1.4;
  letter-spacing: 0.01em;
  min-height: 100%;
}

input {
  background: var(--bg-elev-1);
  border: 1px solid var(--border);
  color: var(--text);
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius);
  font-size: var(--font-size-sm);
  outline: none;
  transition: border-color var(--transition), box-shadow var(--transition);
}

input:focus {
  border-color: var(--accent);
  box-shadow: 0 0 0 1px rgba(77, 163, 255, 0.35);
}

.btn { border: 1px solid var(--border); background: var(--bg-elev-1); color: var(--text); padding: 8px 12px; border-radius: var(--radius); font-size: var(--font-size-sm); cursor: pointer; transition: background var(--transition), border-color var(--transition), transform var(--transition); }
.btn:hover { background: var(--bg-elev-2); border-color: var(--border-strong); }
.btn:active { transform: translateY(1px); }
.btn:disabled { opacity: 0.45; cursor: default; }
.btn.primary { background: linear-gradient(135deg, var(--accent), var(--accent-strong)); border-color: transparent; color: #02111f; font-weight: 600; }
.btn.primary:hover { filter: brightness(1.05); }
.btn.ghost { background: transparent; border-style: dashed; color: var(--text-dim); }

.panel { background: var(--panel); border: 1px solid var(--border); border-radius: var(--radius); box-shadow: var(--shadow-soft); }

.gel-app { background: var(--bg); color: var(--text); min-height: 100vh; display: flex; flex-direction: column; gap: var(--space-3); padding: var(--space-3); }

.topbar { display: flex; align-items: center; justify-content: space-between; gap: var(--space-3); height: 56px; padding: 0 var(--space-4); }
.brand-mark { display: flex; align-items: center; gap: var(--space-2); font-weight: 600; letter-spacing: 0.03em; }
.brand-title { font-size: var(--font-size-lg); }
.topbar-actions { display: flex; align-items: center; gap: var(--space-2); }

.gel-body { display: grid; grid-template-columns: minmax(0, 1fr) 340px; gap: var(--space-3); flex: 1 1 auto; min-height: 0; }
.gel-card { display: flex; flex-direction: column; gap: var(--space-2); padding: var(--space-3); min-height: 520px; }
.gel-meta { display: flex; align-items: center; justify-content: space-between; gap: var(--space-2); }
.pane-title { font-size: var(--font-size-md); font-weight: 600; letter-spacing: 0.01em; }
.gel-stage { position: relative; flex: 1 1 auto; min-height: 420px; background: var(--bg-elev-1); border: 1px solid var(--border); border-radius: var(--radius); overflow: hidden; }
.gel-canvas { position: absolute; inset: 0; width: 100%; height: 100%; }

.sidebar { display: flex; flex-direction: column; gap: var(--space-3); padding: var(--space-3); overflow: auto; }
.sidebar-section { display: flex; flex-direction: column; gap: var(--space-2); border-bottom: 1px solid var(--border); padding-bottom: var(--space-3); }
.sidebar-section:last-child { border-bottom: none; padding-bottom: 0; }
.section-title { font-size: var(--font-size-sm); font-weight: 600; letter-spacing: 0.04em; text-transform: uppercase; color: var(--text-dim); }
.section-subtitle { font-size: var(--font-size-xs); color: var(--text-muted); }

.input-stack { display: flex; flex-direction: column; gap: 6px; }
.input-label { font-size: var(--font-size-xs); color: var(--text-muted); letter-spacing: 0.04em; text-transform: uppercase; }
.input-compact { padding: 8px 10px; font-size: var(--font-size-sm); border-radius: var(--radius); font-family: var(--font-mono); }

.chip { padding: var(--space-1) var(--space-2); border-radius: var(--radius-pill); background: var(--bg-elev-2); border: 1px solid var(--border); font-size: var(--font-size-xs); color: var(--text-dim); }

.status-pill { display: inline-flex; align-items: center; gap: 6px; padding: 6px 10px; border-radius: var(--radius-pill); font-size: var(--font-size-xs); border: 1px solid var(--border); background: var(--bg-elev-1); }
.status-bad { border-color: rgba(240, 99, 92, 0.4); color: var(--negative); }

.legend { display: flex; flex-direction: column; gap: var(--space-1); }
.legend-row { display: flex; align-items: center; gap: var(--space-2); font-size: var(--font-size-xs); color: var(--text-dim); }
.legend-swatch { width: 14px; height: 14px; border-radius: 4px; border: 1px solid var(--border-strong); display: inline-block; }

.summary-table { display: flex; flex-direction: column; gap: var(--space-1); font-family: var(--font-mono); }
.summary-head, .summary-row { display: grid; grid-template-columns: 0.6fr 1.1fr 0.9fr 1.2fr; align-items: center; gap: var(--space-2); }
.summary-head { font-size: var(--font-size-xs); color: var(--text-muted); text-transform: uppercase; letter-spacing: 0.04em; }
.summary-row { padding: var(--space-1) var(--space-2); border: 1px solid var(--border); border-radius: 6px; background: var(--bg-elev-1); font-size: var(--font-size-xs); }
.summary-row.control-row { border-color: rgba(214, 39, 40, 0.5); }

@media (max-width: 980px) {
  .gel-body { grid-template-columns: 1fr; }
  .gel-card { min-height: 420px; }
  .gel-stage { min-height: 320px; }
}
"#;
