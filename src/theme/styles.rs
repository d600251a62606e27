//! Global CSS styles for Subledger.
//!
//! Two variable sets, selected by the `light` / `dark` class on the
//! dashboard root. Components reference variables only.

pub const GLOBAL_STYLES: &str = r#"
/* === Light palette (default) === */
.dashboard.light {
  --bg: #f8fafc;
  --surface: #ffffff;
  --surface-muted: #f1f5f9;
  --border: #e2e8f0;
  --text-primary: #0f172a;
  --text-secondary: #64748b;
  --text-muted: #94a3b8;
  --link-hover: #2563eb;
  --link-hover-bg: #eff6ff;

  --alert-bg: #fffbeb;
  --alert-border: #f59e0b;
  --alert-item-border: #fde68a;
  --alert-title: #92400e;
  --alert-action-bg: #fef3c7;
  --alert-action-text: #b45309;
  --danger: #ef4444;

  --trial-bg: #f0fdf4;
  --trial-text: #16a34a;
}

/* === Dark palette === */
.dashboard.dark {
  --bg: #0f172a;
  --surface: #1e293b;
  --surface-muted: #334155;
  --border: #334155;
  --text-primary: #f1f5f9;
  --text-secondary: #94a3b8;
  --text-muted: #64748b;
  --link-hover: #60a5fa;
  --link-hover-bg: rgba(30, 58, 138, 0.3);

  --alert-bg: rgba(120, 53, 15, 0.3);
  --alert-border: #f59e0b;
  --alert-item-border: #92400e;
  --alert-title: #fde68a;
  --alert-action-bg: rgba(120, 53, 15, 0.5);
  --alert-action-text: #fde68a;
  --danger: #f87171;

  --trial-bg: rgba(20, 83, 45, 0.3);
  --trial-text: #4ade80;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  font-family: system-ui, -apple-system, 'Segoe UI', 'Noto Sans TC', sans-serif;
}

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
}

/* === Layout === */
.dashboard {
  min-height: 100vh;
  padding: 1.5rem;
  background: var(--bg);
  color: var(--text-primary);
  transition: background 300ms ease, color 300ms ease;
}

.dashboard-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  margin-bottom: 2rem;
}

.page-title {
  font-size: 1.875rem;
  font-weight: 700;
}

.page-subtitle {
  margin-top: 0.5rem;
  color: var(--text-secondary);
}

.dashboard-header__controls {
  display: flex;
  gap: 0.75rem;
}

.dashboard__body {
  display: grid;
  grid-template-columns: minmax(260px, 340px) 1fr;
  gap: 2rem;
  align-items: start;
}

@media (max-width: 760px) {
  .dashboard__body {
    grid-template-columns: 1fr;
  }
}

.section-header {
  font-size: 1.125rem;
  font-weight: 700;
}

/* === Buttons === */
.btn-toggle {
  font: inherit;
  cursor: pointer;
  border-radius: 0.5rem;
  transition: background 150ms ease, border-color 150ms ease;
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 0.75rem;
  background: var(--surface);
  color: var(--text-primary);
  border: 1px solid var(--border);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.btn-toggle:hover {
  background: var(--surface-muted);
}

.locale-toggle__label {
  font-size: 0.875rem;
  font-weight: 500;
}

.theme-toggle--sun {
  color: #fbbf24;
}

/* === Trial Alert === */
.trial-alert {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  margin-bottom: 2.5rem;
  padding: 1rem;
  background: var(--alert-bg);
  border-left: 4px solid var(--alert-border);
  border-radius: 0 0.5rem 0.5rem 0;
}

.trial-alert__icon {
  color: var(--alert-border);
  font-size: 1.5rem;
}

.trial-alert__body {
  flex: 1;
}

.trial-alert__title {
  font-size: 1.125rem;
  font-weight: 700;
  color: var(--alert-title);
}

.trial-alert__grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 0.75rem;
  margin-top: 0.75rem;
}

.trial-alert__item {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.75rem;
  background: var(--surface);
  border: 1px solid var(--alert-item-border);
  border-radius: 0.25rem;
}

.trial-alert__name {
  font-weight: 700;
}

.trial-alert__date {
  margin-top: 0.25rem;
  font-size: 0.75rem;
  font-weight: 600;
  color: var(--danger);
}

.trial-alert__cancel {
  padding: 0.375rem 0.75rem;
  border-radius: 999px;
  font-size: 0.75rem;
  font-weight: 500;
  background: var(--alert-action-bg);
  color: var(--alert-action-text);
}

/* === External Links === */
.external-link {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  text-decoration: none;
}

.external-link__arrow {
  font-size: 0.75em;
}

/* === Card Faces === */
.card-list {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.card-face {
  position: relative;
  display: block;
  width: 100%;
  height: 11rem;
  padding: 1.5rem;
  border: 2px solid transparent;
  border-radius: 1rem;
  color: #ffffff;
  font: inherit;
  text-align: left;
  cursor: pointer;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.15);
  transition: transform 300ms ease, border-color 300ms ease;
}

.card-face:hover {
  transform: translateY(-4px);
}

.card-face--active {
  border-color: var(--link-hover);
  box-shadow: 0 0 0 3px var(--link-hover-bg), 0 10px 15px -3px rgba(0, 0, 0, 0.2);
}

.card-face__top {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
}

.card-face__bank {
  font-size: 1.125rem;
  font-weight: 700;
  opacity: 0.9;
}

.card-face__number {
  margin-top: 1.75rem;
  font-family: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  font-size: 1.375rem;
  letter-spacing: 0.08em;
}

.card-face__name {
  position: absolute;
  left: 1.5rem;
  bottom: 1.25rem;
  font-size: 0.875rem;
  font-weight: 500;
  opacity: 0.9;
}

/* === Card Detail === */
.card-detail {
  display: flex;
  flex-direction: column;
  padding: 1.25rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 0.75rem;
  transition: background 300ms ease;
}

.card-detail__header {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
  margin-bottom: 1rem;
}

.card-detail__digits {
  font-family: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.card-detail__empty {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 2rem 0;
  font-size: 0.875rem;
  color: var(--text-muted);
}

.card-detail__empty-icon {
  font-size: 2rem;
  opacity: 0.3;
  margin-bottom: 0.5rem;
}

.card-detail__total {
  display: flex;
  justify-content: space-between;
  margin-top: 1.25rem;
  padding-top: 1rem;
  border-top: 1px solid var(--border);
  color: var(--text-secondary);
}

.card-detail__total-value {
  font-weight: 700;
  color: var(--text-primary);
}

/* === Subscription Rows === */
.subscription-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.subscription-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.subscription-row__main {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.subscription-row__name {
  font-weight: 700;
}

.subscription-row__billing {
  font-size: 0.75rem;
  color: var(--text-secondary);
}

.subscription-row__manage {
  padding: 0.5rem;
  border-radius: 999px;
  color: var(--text-muted);
  opacity: 0;
  transition: opacity 150ms ease, color 150ms ease, background 150ms ease;
}

.subscription-row:hover .subscription-row__manage,
.subscription-row__manage:focus {
  opacity: 1;
}

.subscription-row__manage:hover {
  color: var(--link-hover);
  background: var(--link-hover-bg);
}

.glyph-avatar {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 999px;
  background: var(--surface-muted);
  color: var(--text-secondary);
  font-size: 0.875rem;
  font-weight: 700;
}

.trial-badge {
  padding: 0 0.25rem;
  border-radius: 0.25rem;
  font-weight: 700;
  background: var(--trial-bg);
  color: var(--trial-text);
}
"#;
