//! CSS for the portfolio page.
//!
//! One stylesheet shared by the static export (inlined in `<head>`) and the
//! browser build (inlined at the top of the mounted app).
//!
//! # Customization
//!
//! ```rust
//! use portfolio_page::styles::PAGE_CSS;
//!
//! let my_css = ".project-card { border: 1px solid #333; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Complete CSS for the page - black background, centered sections, a
/// two-column project grid on wide screens.
pub const PAGE_CSS: &str = r#"
:root {
    --bg: #000000;
    --card: #18181b;
    --text: #ffffff;
    --text-muted: #9ca3af;
    --text-soft: #d1d5db;
    --text-faint: #4b5563;
    --radius: 1rem;
    --font: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}

* { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font);
}

.portfolio {
    min-height: 100vh;
    overflow-x: hidden;
}

a { color: inherit; text-decoration: none; }
a:hover { text-decoration: underline; }

/* Sections */
.section {
    padding: 5rem 2rem;
    max-width: 56rem;
    margin: 0 auto;
    text-align: center;
}

.section-narrow { max-width: 36rem; }

.section-wide {
    max-width: none;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
}

.section-title {
    font-size: 1.875rem;
    font-weight: 600;
    margin: 0 0 1.5rem;
}

.section-text {
    color: var(--text-muted);
    font-size: 1.125rem;
    line-height: 1.75;
}

.reveal { animation: reveal 0.8s ease-out both; }

@keyframes reveal {
    from { opacity: 0; transform: translateY(50px); }
    to { opacity: 1; transform: translateY(0); }
}

/* Hero */
.hero {
    height: 100vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    text-align: center;
    padding: 0 1rem;
}

.hero-avatar {
    width: 10rem;
    height: 10rem;
    border-radius: 9999px;
    object-fit: cover;
    margin-bottom: 1.5rem;
    border: 4px solid var(--text);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.5);
}

.hero-name {
    font-size: 3rem;
    font-weight: 700;
    margin: 0 0 1rem;
}

.hero-tagline { font-size: 1.25rem; color: var(--text-soft); margin: 0; }
.hero-focus { color: var(--text-muted); margin: 0.5rem 0 0; }

.hero-links {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1rem;
    margin-top: 1.5rem;
}

.hero-link {
    display: inline-flex;
    align-items: center;
    gap: 0.25rem;
    font-size: 0.875rem;
}

/* Projects */
.project-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2.5rem;
    width: 100%;
    max-width: 64rem;
}

.project-card {
    display: block;
    background: var(--card);
    border-radius: var(--radius);
    padding: 1rem;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.4);
    transition: transform 0.3s, box-shadow 0.3s;
}

.project-card:hover {
    transform: scale(1.05);
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.6);
    text-decoration: none;
}

.project-card:active { transform: scale(0.98); }

.project-title { font-size: 1.25rem; font-weight: 600; margin: 0 0 0.5rem; }
.project-description { color: var(--text-muted); font-size: 0.875rem; margin: 0; }

.projects-empty {
    color: var(--text-faint);
    font-size: 0.875rem;
    margin-top: 1.5rem;
}

/* Activity */
.activity-graph {
    border-radius: 0.75rem;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.4);
    max-width: 100%;
}

/* Contact */
.contact-form {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    width: 100%;
}

.contact-input {
    padding: 0.75rem;
    border-radius: 0.75rem;
    border: none;
    width: 100%;
    color: #000000;
    font: inherit;
}

.contact-submit {
    align-self: center;
    background: var(--text);
    color: #000000;
    padding: 0.5rem 1.5rem;
    border: none;
    border-radius: 0.75rem;
    font-weight: 600;
    cursor: pointer;
}

.contact-submit:hover { background: #e5e7eb; }
.contact-submit:disabled { opacity: 0.5; cursor: not-allowed; }

.contact-fields {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    border: none;
    margin: 0;
    padding: 0;
}

.contact-note {
    color: var(--text-faint);
    font-size: 0.875rem;
    text-align: center;
    margin: 0;
}

/* Footer */
.footer {
    text-align: center;
    color: var(--text-faint);
    font-size: 0.875rem;
    padding: 1.5rem 0;
}

.icon { flex-shrink: 0; }

@media (min-width: 768px) {
    .hero-name { font-size: 4.5rem; }
    .hero-tagline { font-size: 1.5rem; }
    .section-title { font-size: 2.25rem; }
    .project-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}
"#;

/// Content Security Policy for the static export.
///
/// Allows the activity-graph image host and the GitHub API; everything else
/// stays same-origin.
pub const PAGE_CSP: &str = "default-src 'self'; img-src 'self' data: https://leetcard.jacoblin.cool; style-src 'self' 'unsafe-inline'; script-src 'self'; connect-src 'self' https://api.github.com; font-src 'self' data:; form-action 'none';";
