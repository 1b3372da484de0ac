//! Global CSS styles for Deckview.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg: #0f1117;
  --bg-raised: #171a23;
  --bg-overlay: rgba(5, 6, 10, 0.72);
  --border: rgba(233, 236, 246, 0.12);

  /* Accent */
  --accent: #7aa2ff;
  --accent-glow: rgba(122, 162, 255, 0.35);

  /* Text */
  --text-primary: #e9ecf6;
  --text-secondary: rgba(233, 236, 246, 0.75);
  --text-muted: rgba(233, 236, 246, 0.6);

  /* Typography */
  --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.4;
}

/* === Page === */
.page {
  max-width: 1200px;
  margin: 0 auto;
  padding: 24px;
}

.page-header {
  margin-bottom: 16px;
}

.title {
  font-size: 1.75rem;
  font-weight: 700;
}

/* === Toolbar === */
.toolbar {
  display: flex;
  gap: 12px;
  flex-wrap: wrap;
  margin-bottom: 8px;
}

.search-input,
.tag-filter {
  background: var(--bg-raised);
  color: var(--text-primary);
  border: 1px solid var(--border);
  border-radius: 10px;
  padding: 10px 12px;
  font: inherit;
}

.search-input {
  flex: 1 1 280px;
}

.search-input:focus,
.tag-filter:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-glow);
}

.stats {
  color: var(--text-muted);
  font-size: 0.875rem;
  margin: 8px 0 16px;
}

/* === Grid === */
.grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 16px;
}

.grid-empty {
  color: var(--text-secondary);
}

.card {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 14px;
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-fast), border-color var(--transition-fast);
}

.card:hover,
.card:focus-visible {
  transform: translateY(-2px);
  border-color: var(--accent);
  outline: none;
}

.thumb {
  aspect-ratio: 3 / 4;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(255, 255, 255, 0.03);
}

.thumb img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.thumb-placeholder {
  color: var(--text-muted);
}

.card-body {
  padding: 10px 12px 12px;
}

.card-name {
  font-size: 1rem;
}

.card-sub {
  color: var(--text-secondary);
  font-size: 0.8125rem;
  min-height: 1em;
}

.tags {
  display: flex;
  flex-wrap: wrap;
  gap: 6px;
  margin-top: 8px;
}

.tag {
  font-size: 0.75rem;
  padding: 2px 8px;
  border-radius: 999px;
  border: 1px solid var(--border);
  color: var(--text-secondary);
}

/* === Detail Dialog === */
.modal {
  border: none;
  padding: 0;
  margin: auto;
  background: transparent;
  color: var(--text-primary);
  max-width: min(900px, 92vw);
}

.modal::backdrop {
  background: var(--bg-overlay);
}

.modal-inner {
  position: relative;
  display: flex;
  gap: 20px;
  padding: 20px;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 16px;
}

.modal-close {
  position: absolute;
  top: 10px;
  right: 12px;
  background: none;
  border: none;
  color: var(--text-secondary);
  font-size: 1.5rem;
  cursor: pointer;
}

.modal-img img {
  max-width: 320px;
  border-radius: 12px;
}

.modal-text .meta {
  color: var(--text-secondary);
  margin-top: 4px;
}

.rules-heading {
  margin: 14px 0 8px;
}

.rules {
  white-space: pre-wrap;
  color: var(--text-secondary);
}
"#;
