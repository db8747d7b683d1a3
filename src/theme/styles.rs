//! Global CSS styles for mdraft.
//!
//! Dark editorial aesthetic: near-black surfaces, red accents, mono editor.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg-black: #0a0a0a;
  --bg-panel: #111113;
  --bg-inset: rgba(0, 0, 0, 0.4);
  --border: #1f1f23;

  /* Accent (red) */
  --accent: #dc2626;
  --accent-soft: rgba(220, 38, 38, 0.4);
  --accent-faint: rgba(220, 38, 38, 0.2);

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: #9ca3af;
  --text-muted: #6b7280;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--bg-black);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 16px;
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a {
  color: var(--accent);
  text-decoration: none;
}

/* === Navigation Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: rgba(10, 10, 10, 0.92);
  border-bottom: 1px solid var(--accent-faint);
  backdrop-filter: blur(8px);
}

.nav-header-inner {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.app-title {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--text-primary);
  letter-spacing: 0.02em;
}

.app-title::after {
  content: '_';
  color: var(--accent);
}

.nav-links {
  display: flex;
  gap: 0.5rem;
}

.nav-link {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.45rem 0.9rem;
  border-radius: 6px;
  color: var(--text-secondary);
  font-size: 0.875rem;
  transition: color var(--transition-fast), background var(--transition-fast);
}

.nav-link:hover {
  color: var(--text-primary);
  background: var(--accent-faint);
}

.nav-link.active {
  color: var(--accent);
  background: var(--accent-faint);
}

.nav-link-icon {
  display: inline-flex;
}

/* === Landing === */
.landing {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 2rem;
  gap: 3rem;
}

.landing-header {
  max-width: 640px;
}

.eyebrow {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.3em;
  color: var(--accent-soft);
  margin-bottom: 0.75rem;
}

.page-title {
  font-size: 2.25rem;
  font-weight: 700;
  color: var(--text-primary);
  margin-bottom: 0.75rem;
}

.accent {
  color: var(--accent);
}

.tagline {
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.btn-enter {
  font-size: 1rem;
  padding: 0.75rem 2.5rem;
}

.landing-notes {
  max-width: 480px;
}

.body-text {
  color: var(--text-secondary);
}

/* === Create Page === */
.create-page {
  max-width: 1200px;
  margin: 0 auto;
  padding: 2.5rem 1.5rem 4rem;
}

.create-intro {
  margin-bottom: 2.5rem;
  max-width: 720px;
}

/* === Cards === */
.create-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 2rem;
}

@media (max-width: 960px) {
  .create-grid {
    grid-template-columns: 1fr;
  }
}

.card {
  background: var(--bg-panel);
  border: 1px solid var(--accent-faint);
  border-radius: 10px;
  overflow: hidden;
}

.card-header {
  padding: 1.25rem 1.5rem 0.75rem;
}

.card-title {
  font-size: 1.125rem;
  font-weight: 600;
  color: var(--text-primary);
}

.card-description {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.card-body {
  padding: 0.75rem 1.5rem 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

/* === Form Fields === */
.field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.field-label {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-primary);
}

.text-input {
  width: 100%;
  padding: 0.6rem 0.85rem;
  background: var(--bg-inset);
  border: 1px solid var(--accent-soft);
  border-radius: 6px;
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 0.9375rem;
  transition: border-color var(--transition-fast);
}

.text-input::placeholder {
  color: var(--text-muted);
}

.text-input:focus {
  outline: none;
  border-color: var(--accent);
}

.md-textarea {
  width: 100%;
  min-height: 260px;
  padding: 0.85rem;
  background: var(--bg-inset);
  border: 1px solid var(--accent-soft);
  border-radius: 6px;
  color: var(--text-primary);
  font-family: var(--font-mono);
  font-size: 0.875rem;
  line-height: 1.55;
  resize: vertical;
  transition: border-color var(--transition-fast);
}

.md-textarea::placeholder {
  color: var(--text-muted);
}

.md-textarea:focus {
  outline: none;
  border-color: var(--accent);
}

.field-error {
  font-size: 0.8125rem;
  color: #ff3366;
}

.hint {
  font-size: 0.75rem;
  color: var(--text-muted);
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: 6px;
  border: 1px solid transparent;
  font-family: var(--font-sans);
  font-size: 0.875rem;
  cursor: pointer;
  transition: background var(--transition-fast), border-color var(--transition-fast);
}

.btn:disabled {
  opacity: 0.5;
  cursor: default;
}

.btn-primary {
  background: var(--accent);
  color: #0a0a0a;
  font-weight: 600;
}

.btn-primary:hover:not(:disabled) {
  background: #ef4444;
}

.btn-outline {
  background: transparent;
  border-color: var(--accent-soft);
  color: var(--accent);
}

.btn-outline:hover:not(:disabled) {
  background: var(--accent-faint);
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
}

.btn-ghost:hover:not(:disabled) {
  color: var(--text-primary);
  background: var(--accent-faint);
}

/* === Banner === */
.banner-picker {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.banner-file-name {
  font-size: 0.8125rem;
  font-family: var(--font-mono);
  color: var(--text-secondary);
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.banner-frame {
  border: 1px solid var(--accent-soft);
  border-radius: 6px;
  overflow: hidden;
}

.banner-img {
  display: block;
  width: 100%;
  height: 176px;
  object-fit: cover;
}

/* === Editor Toolbar === */
.editor-toolbar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
  flex-wrap: wrap;
}

/* === Preview === */
.preview {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.preview-title {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text-primary);
}

.preview-pane {
  margin-top: 0.5rem;
  padding: 1rem;
  background: var(--bg-inset);
  border: 1px solid var(--accent-faint);
  border-radius: 6px;
  max-height: 480px;
  overflow: auto;
}

.preview-empty {
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Rendered Markdown === */
.prose {
  color: #e5e7eb;
  font-size: 0.9375rem;
}

.prose h1, .prose h2, .prose h3, .prose h4 {
  color: var(--text-primary);
  margin: 1.25em 0 0.5em;
  line-height: 1.25;
}

.prose h1:first-child, .prose h2:first-child, .prose h3:first-child {
  margin-top: 0;
}

.prose h1 { font-size: 1.5rem; }
.prose h2 { font-size: 1.25rem; }
.prose h3 { font-size: 1.0625rem; }

.prose p {
  margin: 0.75em 0;
}

.prose ul, .prose ol {
  margin: 0.75em 0;
  padding-left: 1.5em;
}

.prose li {
  margin: 0.25em 0;
}

.prose blockquote {
  margin: 1em 0;
  padding: 0.25em 1em;
  border-left: 3px solid var(--accent);
  color: var(--text-secondary);
}

.prose code {
  font-family: var(--font-mono);
  font-size: 0.85em;
  background: rgba(220, 38, 38, 0.12);
  padding: 0.15em 0.35em;
  border-radius: 4px;
}

.prose pre {
  margin: 1em 0;
  padding: 0.85em 1em;
  background: #000;
  border: 1px solid var(--border);
  border-radius: 6px;
  overflow-x: auto;
}

.prose pre code {
  background: none;
  padding: 0;
}

.prose table {
  border-collapse: collapse;
  margin: 1em 0;
  width: 100%;
}

.prose th, .prose td {
  border: 1px solid var(--border);
  padding: 0.4em 0.75em;
  text-align: left;
}

.prose th {
  background: var(--accent-faint);
  color: var(--text-primary);
}

.prose del {
  color: var(--text-muted);
}

.prose img {
  max-width: 100%;
  border-radius: 6px;
}

.prose hr {
  border: none;
  border-top: 1px solid var(--border);
  margin: 1.5em 0;
}
"#;
