//! Global CSS styles for Card Court.
//!
//! Warm clay court with amber and orange accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* COURT (Backgrounds) */
  --court-clay: #A1887F;
  --cream: #FFF8E1;
  --white: #ffffff;

  /* TEXT */
  --coffee: #3E2723;
  --text-muted: #4b5563;

  /* ACCENTS */
  --amber: #FFB300;
  --amber-deep: #FF9800;
  --orange: #FF7E00;
  --orange-glow: rgba(255, 160, 0, 0.8);

  /* SEMANTIC */
  --danger: #dc2626;
  --danger-deep: #b91c1c;
  --danger-soft: #fee2e2;

  /* Typography */
  --font-serif: Georgia, 'Times New Roman', serif;
  --font-sans: system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease-in-out;
  --transition-normal: 300ms ease-in-out;

  --shadow-lg: 0 10px 25px rgba(0, 0, 0, 0.25);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--court-clay);
  color: var(--coffee);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Page Layout === */
.court {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 2rem;
}

.court-header {
  width: 100%;
  max-width: 64rem;
  margin-bottom: 3rem;
  padding: 1rem;
  text-align: center;
  background: var(--coffee);
  border-radius: 0 0 0.75rem 0.75rem;
  box-shadow: var(--shadow-lg);
}

.page-title {
  font-family: var(--font-serif);
  font-size: 2.25rem;
  font-weight: 800;
  color: var(--amber);
  letter-spacing: 0.05em;
}

.court-header__rule {
  width: 80%;
  margin: 0.75rem auto 0;
  border: none;
  border-top: 2px solid var(--amber);
  opacity: 0.7;
}

.court-actions {
  width: 100%;
  margin-top: 2.5rem;
  display: flex;
  justify-content: center;
}

/* === Card Grid === */
.card-grid {
  width: 100%;
  max-width: 64rem;
  display: flex;
  flex-wrap: wrap;
  flex-direction: row-reverse;
  justify-content: flex-start;
}

.card-grid__empty {
  color: var(--cream);
  font-style: italic;
}

/* === Card Faces === */
.card-face {
  background: var(--cream);
  color: var(--coffee);
  border-radius: 0.75rem;
  box-shadow: var(--shadow-lg);
  transition: all var(--transition-normal);
}

.card-face--tile {
  width: 16rem;
  margin: 1rem;
  padding: 1rem;
  border: 2px solid var(--orange);
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
}

.card-face--flipped {
  width: 16rem;
  margin: 1rem;
  padding: 1rem;
  border: 2px solid var(--orange);
}

.card-face--modal {
  position: relative;
  width: 300px;
  padding: 1rem;
  border: 4px solid var(--orange);
}

.card-face.interactive {
  cursor: pointer;
}

.card-face.interactive:hover {
  transform: scale(1.03);
  box-shadow: 0 0 20px var(--orange-glow);
}

.card-face__tile-body {
  width: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 0.5rem;
}

.card-face__img {
  width: 100%;
  object-fit: cover;
  border-radius: 0.5rem;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.2);
}

.card-face__img--tile {
  height: 12rem;
  border: 2px solid var(--amber);
}

.card-face__img--flipped {
  height: 10rem;
  margin: 0.5rem 0;
  border: 4px solid var(--amber);
}

.card-face__img--modal {
  height: 12rem;
  margin: 0.5rem 0;
  border: 4px solid var(--amber);
}

.card-face__name {
  margin-top: 0.5rem;
  font-size: 1.25rem;
  font-weight: 900;
}

.card-face__title {
  width: 100%;
  margin-bottom: 0.5rem;
  padding-bottom: 0.25rem;
  font-size: 1.25rem;
  font-weight: 900;
  border-bottom: 2px solid var(--amber);
}

.card-face__number {
  margin-left: 0.25rem;
  font-size: 0.875rem;
  font-weight: 400;
  color: var(--orange);
}

.card-face__stats {
  width: 100%;
  font-size: 0.875rem;
}

.card-face__stat + .card-face__stat {
  margin-top: 0.25rem;
}

.card-face__stat-label {
  font-size: 1rem;
  font-weight: 600;
}

.card-face__description {
  width: 100%;
  margin-top: 0.75rem;
  padding-top: 0.75rem;
  font-size: 0.75rem;
  font-style: italic;
  text-align: justify;
  color: var(--text-muted);
  border-top: 2px solid var(--amber);
}

.card-face__description-label {
  font-weight: 700;
}

.card-face__actions {
  width: 100%;
  margin-top: 1rem;
  display: flex;
  justify-content: space-around;
  gap: 0.5rem;
}

.card-image {
  max-width: 100%;
}

/* === Buttons === */
.btn-primary,
.btn-danger {
  padding: 0.25rem 0.75rem;
  font-size: 0.875rem;
  font-weight: 700;
  border: none;
  border-radius: 9999px;
  cursor: pointer;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.2);
  transition: background var(--transition-fast);
}

.btn-primary {
  background: var(--amber);
  color: #000;
}

.btn-primary:hover {
  background: var(--amber-deep);
}

.btn-danger {
  background: var(--danger);
  color: var(--white);
}

.btn-danger:hover {
  background: var(--danger-deep);
}

.btn-pill {
  padding: 0.75rem 2rem;
  font-size: 1.125rem;
  font-weight: 700;
  background: var(--white);
  color: #000;
  border: 2px solid var(--orange);
  border-radius: 9999px;
  cursor: pointer;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
  transition: background var(--transition-fast);
}

.btn-pill:hover {
  background: #f3f4f6;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border: none;
  border-radius: 9999px;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.icon {
  width: 1.5rem;
  height: 1.5rem;
}

.close-btn {
  position: absolute;
  z-index: 10;
}

.close-btn--light {
  top: 0.75rem;
  right: 0.75rem;
  padding: 0.25rem;
  background: var(--white);
}

.close-btn--light:hover {
  background: #e5e7eb;
}

.close-btn--accent {
  top: 1rem;
  right: 1rem;
  padding: 0.5rem;
  background: var(--orange);
  color: var(--white);
  box-shadow: var(--shadow-lg);
}

.close-btn--accent:hover {
  background: var(--amber-deep);
}

/* === Overlays === */
.detail-overlay,
.modal-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  justify-content: center;
  align-items: center;
  padding: 1rem;
}

.detail-overlay {
  z-index: 40;
  background: rgba(0, 0, 0, 0.1);
}

.modal-overlay {
  z-index: 50;
  background: rgba(0, 0, 0, 0.7);
}

/* === Card Form === */
.card-form {
  position: relative;
  width: 100%;
  max-width: 56rem;
  max-height: 90vh;
  overflow-y: auto;
  display: flex;
  flex-wrap: wrap;
  gap: 2rem;
  padding: 1.5rem;
  background: var(--white);
  border-radius: 0.75rem;
  box-shadow: var(--shadow-lg);
}

.card-form__fields {
  flex: 1 1 20rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.card-form__title {
  margin-bottom: 1rem;
  padding-bottom: 0.5rem;
  font-size: 1.5rem;
  font-weight: 700;
  border-bottom: 2px solid var(--amber);
}

.form-field {
  display: flex;
  flex-direction: column;
}

.input-label {
  font-weight: 600;
  color: var(--orange);
}

.input-field {
  margin-top: 0.25rem;
  padding: 0.5rem;
  font-family: inherit;
  color: #1f2937;
  border: 1px solid #d1d5db;
  border-radius: 0.5rem;
  transition: box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--orange);
  box-shadow: 0 0 0 2px var(--orange);
}

.input-field.textarea {
  resize: vertical;
}

.form-error {
  margin-top: 1rem;
  padding: 0.75rem;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--danger-deep);
  background: var(--danger-soft);
  border-left: 4px solid var(--danger);
  border-radius: 0.375rem;
}

.card-form__submit {
  width: 100%;
  margin-top: 1.5rem;
  padding: 0.75rem;
  font-size: 1.125rem;
  border-radius: 0.5rem;
}

/* === Preview === */
.card-form__preview {
  flex: 1 1 18rem;
  display: flex;
  justify-content: center;
  align-items: flex-start;
}

.preview-card {
  width: 18rem;
  padding: 1.5rem;
  background: var(--cream);
  border: 4px solid var(--orange);
  border-radius: 0.75rem;
  box-shadow: var(--shadow-lg);
}

.preview-card__heading {
  margin-bottom: 0.75rem;
  padding-bottom: 0.5rem;
  font-size: 1.25rem;
  font-weight: 900;
  border-bottom: 2px solid var(--amber);
}

.preview-card__img {
  width: 100%;
  height: 10rem;
  margin: 0.75rem 0;
  object-fit: cover;
  border: 2px solid var(--amber);
  border-radius: 0.5rem;
}

.preview-card__name {
  font-size: 1.25rem;
  font-weight: 900;
}

.preview-card__description {
  max-height: 4rem;
  margin-top: 0.5rem;
  overflow: hidden;
  font-size: 0.75rem;
  font-style: italic;
  color: var(--text-muted);
}
"#;
