/// Styles for the floating toggle button and chat panel.
pub const WIDGET_CSS: &str = r#"
:root {
    --chat-accent: #2563eb;
    --chat-accent-soft: #3b82f6;
    --chat-surface: #ffffff;
    --chat-border: #e5e7eb;
    --chat-input-border: #d1d5db;
    --chat-text: #1f2937;
    --chat-muted: #6b7280;
    --chat-bot-bg: #e5e7eb;
}
.chat-widget { position: fixed; bottom: 1rem; right: 1rem; z-index: 50; font-family: system-ui, sans-serif; }
.chat-toggle {
    background: var(--chat-accent); color: #fff; border: none; cursor: pointer;
    padding: 0.5rem 1rem; border-radius: 9999px; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
}
.chat-panel {
    margin-top: 0.5rem; width: 20rem; height: 24rem; display: flex; flex-direction: column;
    background: var(--chat-surface); border: 1px solid var(--chat-border); border-radius: 0.5rem;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
}
.chat-header { padding: 0.5rem 0.75rem; border-bottom: 1px solid var(--chat-border); font-weight: 600; color: var(--chat-text); }
.chat-list { flex: 1; padding: 0.75rem; overflow-y: auto; font-size: 0.875rem; display: flex; flex-direction: column; gap: 0.5rem; }
.message-row { display: flex; }
.message-row.user { justify-content: flex-end; }
.message-row.bot { justify-content: flex-start; }
.bubble { padding: 0.5rem 0.75rem; border-radius: 0.5rem; max-width: 80%; white-space: pre-wrap; }
.bubble.user { background: var(--chat-accent-soft); color: #fff; }
.bubble.bot { background: var(--chat-bot-bg); color: var(--chat-text); }
.chat-thinking { font-size: 0.75rem; color: var(--chat-muted); }
.composer { padding: 0.5rem; border-top: 1px solid var(--chat-border); }
.composer-inner { display: flex; gap: 0.5rem; }
.composer input {
    flex: 1; border: 1px solid var(--chat-input-border); border-radius: 0.25rem;
    padding: 0.25rem 0.5rem; font-size: 0.875rem; outline: none;
}
.composer input:focus { box-shadow: 0 0 0 1px var(--chat-accent); }
.composer button {
    background: var(--chat-accent); color: #fff; border: none; border-radius: 0.25rem;
    padding: 0.25rem 0.75rem; font-size: 0.875rem; cursor: pointer;
}
.composer button:disabled { opacity: 0.5; cursor: default; }
"#;
