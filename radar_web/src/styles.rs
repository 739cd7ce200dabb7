//! Stylesheet for both pages, injected once by the root component.
//!
//! Dark theme: black canvas, translucent gray panels, blue to purple accents.

pub const APP_CSS: &str = r#"
:root {
    --bg-black: #000000;
    --panel: rgba(17, 24, 39, 0.6);
    --panel-border: #374151;
    --text-bright: #f3f4f6;
    --text-mid: #d1d5db;
    --text-dim: #9ca3af;
    --text-muted: #6b7280;
    --accent-blue: #3b82f6;
    --accent-purple: #a855f7;
    --accent-pink: #ec4899;
    --accent-green: #22c55e;
    --error: #f87171;
    --radius: 16px;
    --container-max: 72rem;
    --font-sans: system-ui, -apple-system, "Segoe UI", sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--bg-black);
    color: var(--text-bright);
    font-family: var(--font-sans);
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1rem;
}

.gradient-text {
    background: linear-gradient(to right, #60a5fa, #c084fc, #f472b6);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.fade-in {
    animation: fade-in 0.8s ease both;
}

@keyframes fade-in {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}

/* ---------- intake ---------- */

.intake-page {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 3rem 1rem;
    position: relative;
    overflow: hidden;
}

.backdrop {
    position: absolute;
    inset: 0;
    pointer-events: none;
}

.blob {
    position: absolute;
    width: 24rem;
    height: 24rem;
    border-radius: 9999px;
    filter: blur(64px);
}

.blob-blue {
    top: 5rem;
    left: 2.5rem;
    background: rgba(37, 99, 235, 0.2);
    animation: drift-a 20s ease-in-out infinite;
}

.blob-purple {
    bottom: 5rem;
    right: 2.5rem;
    background: rgba(147, 51, 234, 0.2);
    animation: drift-b 15s ease-in-out infinite;
}

@keyframes drift-a {
    50% { transform: translate(100px, 50px); }
}

@keyframes drift-b {
    50% { transform: translate(-100px, -50px); }
}

.intake-inner {
    position: relative;
    z-index: 10;
    width: 100%;
    max-width: 56rem;
}

.intake-hero {
    text-align: center;
    margin-bottom: 3rem;
}

.intake-title {
    font-size: clamp(3rem, 8vw, 4.5rem);
    font-weight: 700;
    margin: 0 0 1.5rem;
}

.intake-lead {
    font-size: 1.5rem;
    color: var(--text-mid);
    margin: 0 0 1rem;
}

.intake-sub {
    font-size: 1.125rem;
    color: var(--text-dim);
    margin: 0;
}

.intake-form {
    max-width: 42rem;
    margin: 0 auto;
    background: var(--panel);
    backdrop-filter: blur(4px);
    border: 1px solid var(--panel-border);
    border-radius: var(--radius);
    padding: 2rem;
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}

.field-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}

@media (max-width: 640px) {
    .field-row { grid-template-columns: 1fr; }
}

.field-label {
    display: block;
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--text-mid);
    margin-bottom: 0.5rem;
}

.field-input {
    width: 100%;
    padding: 1rem;
    border-radius: 8px;
    background: rgba(0, 0, 0, 0.6);
    border: 1px solid var(--panel-border);
    color: var(--text-bright);
    font-size: 1rem;
}

.field-input:focus {
    outline: none;
    border-color: var(--accent-blue);
    box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.2);
}

.form-error {
    color: var(--error);
    font-size: 0.875rem;
    background: rgba(239, 68, 68, 0.1);
    border: 1px solid rgba(239, 68, 68, 0.2);
    border-radius: 8px;
    padding: 0.75rem;
    margin: 0;
}

.submit-btn {
    width: 100%;
    padding: 1rem;
    border: none;
    border-radius: 8px;
    background: linear-gradient(to right, #2563eb, #9333ea);
    color: white;
    font-size: 1.125rem;
    font-weight: 600;
    cursor: pointer;
    transition: transform 0.15s, opacity 0.15s;
}

.submit-btn:hover:not(:disabled) {
    transform: translateY(-2px);
}

.submit-btn:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}

.btn-busy {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
}

.progress-notice {
    margin-top: 2rem;
    text-align: center;
}

.progress-pill {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    background: var(--panel);
    border: 1px solid var(--panel-border);
    border-radius: 9999px;
    padding: 0.75rem 1.5rem;
    font-size: 0.875rem;
    color: var(--text-mid);
}

.dots {
    display: flex;
    gap: 0.25rem;
}

.dot {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 9999px;
    animation: pulse-dot 1s ease-in-out infinite;
}

.dot:nth-child(1) { background: var(--accent-blue); }
.dot:nth-child(2) { background: var(--accent-purple); animation-delay: 0.2s; }
.dot:nth-child(3) { background: var(--accent-pink); animation-delay: 0.4s; }

@keyframes pulse-dot {
    50% { transform: scale(1.5); }
}

.intake-footnote {
    margin-top: 3rem;
    text-align: center;
    font-size: 0.875rem;
    color: var(--text-muted);
}

/* ---------- spinner ---------- */

.spinner {
    width: 1.25rem;
    height: 1.25rem;
    border: 3px solid currentColor;
    border-top-color: transparent;
    border-radius: 9999px;
    animation: spin 1s linear infinite;
}

.spinner-lg {
    width: 4rem;
    height: 4rem;
    border-width: 4px;
    border-color: var(--accent-blue);
    border-top-color: transparent;
    margin: 0 auto 1rem;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

.loading-screen {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    color: var(--text-dim);
}

/* ---------- report ---------- */

.report-page {
    min-height: 100vh;
    color: var(--text-bright);
}

.report-header {
    position: sticky;
    top: 0;
    z-index: 50;
    border-bottom: 1px solid #1f2937;
    background: var(--panel);
    backdrop-filter: blur(4px);
    animation: slide-down 0.5s ease both;
}

@keyframes slide-down {
    from { transform: translateY(-100px); }
    to { transform: translateY(0); }
}

.header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 1rem;
    padding-bottom: 1rem;
}

.back-link {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 600;
}

.back-link:hover {
    opacity: 0.8;
}

.back-arrow {
    font-size: 1.5rem;
}

.skip-btn {
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 8px;
    background: #1f2937;
    color: var(--text-bright);
    font-size: 0.875rem;
    cursor: pointer;
    transition: opacity 0.2s;
}

.skip-btn:hover { background: #374151; }

.skip-btn.hidden {
    opacity: 0;
    pointer-events: none;
}

.report-main {
    padding-top: 3rem;
    padding-bottom: 3rem;
}

.report-title {
    font-size: clamp(2.25rem, 6vw, 3rem);
    font-weight: 700;
    margin: 0 0 0.75rem;
    background: linear-gradient(to right, #60a5fa, #c084fc);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.report-subtitle {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: var(--text-dim);
    margin: 0 0 2rem;
}

.live-dot {
    display: inline-block;
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 9999px;
    background: var(--accent-green);
    animation: blink 1.6s ease-in-out infinite;
}

.report-panel {
    background: var(--panel);
    border: 1px solid var(--panel-border);
    border-radius: var(--radius);
    padding: clamp(2rem, 5vw, 3rem);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}

.report-text {
    white-space: pre-wrap;
    line-height: 1.8;
    font-size: 1rem;
}

.caret {
    display: inline-block;
    width: 0.5rem;
    height: 1.25rem;
    margin-left: 0.25rem;
    vertical-align: text-bottom;
    background: var(--accent-blue);
    animation: blink 0.8s steps(2, start) infinite;
}

@keyframes blink {
    50% { opacity: 0; }
}

.report-actions {
    margin-top: 2rem;
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    justify-content: center;
}

.action-btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 1.5rem;
    border: none;
    border-radius: 8px;
    color: white;
    font-size: 1rem;
    font-weight: 500;
    cursor: pointer;
}

.action-download { background: #2563eb; }
.action-download:hover { background: #3b82f6; }
.action-copy { background: #1f2937; }
.action-copy:hover { background: #374151; }
.action-again { background: #9333ea; }
.action-again:hover { background: #a855f7; }

.footer {
    border-top: 1px solid #1f2937;
    margin-top: 5rem;
    padding: 2rem 0;
    text-align: center;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.not-found {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 1.5rem;
    color: var(--text-dim);
}
"#;
