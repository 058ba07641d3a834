/// Stylesheet for the composer, injected once by the view.
pub const STYLES: &str = r#"
.App { font-family: Arial, sans-serif; color: #222; }
.header { background: #1976d2; color: #fff; padding: 12px 24px; }
.header h1 { margin: 0; font-size: 1.5rem; }
.container { display: flex; gap: 24px; padding: 24px; align-items: flex-start; }
.editor-panel, .preview-panel { flex: 1; min-width: 0; }
.form-group { display: flex; flex-direction: column; margin-bottom: 16px; }
.form-group label { font-weight: bold; margin-bottom: 6px; }
.form-group input[type="text"] { padding: 8px; border: 1px solid #ccc; border-radius: 4px; }
.icon-toolbar { display: flex; flex-wrap: wrap; gap: 4px; border: 1px solid #ccc; border-bottom: none; border-radius: 4px 4px 0 0; padding: 4px; background: #fafafa; }
.icon-btn { display: flex; align-items: center; border: none; background: transparent; cursor: pointer; padding: 4px; border-radius: 4px; }
.icon-btn:hover { background: #e3e3e3; }
.icon-btn .material-icons { font-size: 18px; }
.rich-text { min-height: 200px; padding: 8px; border: 1px solid #ccc; border-radius: 0 0 4px 4px; font-family: monospace; font-size: 12px; resize: vertical; }
.btn-save, .btn-download { padding: 0.5rem 1rem; font-size: 1rem; color: #fff; border: none; border-radius: 4px; cursor: pointer; }
.btn-save { background: #1976d2; }
.btn-download { background: #388e3c; }
.preview { border: 1px solid #ccc; border-radius: 4px; padding: 16px; min-height: 200px; background: #fff; overflow: auto; }
.download-section { margin-top: 16px; }
"#;
