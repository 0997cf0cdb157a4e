//! Global CSS styles for Showreel.
//!
//! Black cinematic layout: oversized serif title, spaced uppercase labels,
//! grayscale media that regains color on hover.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --black: #000000;
  --panel: #111111;
  --panel-soft: rgba(23, 23, 23, 0.5);
  --line: rgba(255, 255, 255, 0.05);
  --line-strong: rgba(255, 255, 255, 0.2);

  /* Text */
  --text-primary: #ffffff;
  --text-secondary: rgba(255, 255, 255, 0.5);
  --text-muted: rgba(255, 255, 255, 0.2);
  --text-ghost: #262626;

  /* Semantic */
  --danger: rgba(239, 68, 68, 0.8);

  /* Typography */
  --font-serif: 'Cormorant Garamond', 'Playfair Display', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Label scale */
  --label-xs: 9px;
  --label-sm: 10px;

  /* Transitions */
  --transition-fast: 300ms ease;
  --transition-slow: 700ms ease;
  --transition-cinematic: 1s cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--black);
  color: var(--text-primary);
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
}

::selection {
  background: var(--text-primary);
  color: var(--black);
}

a {
  color: inherit;
  text-decoration: none;
  transition: color var(--transition-fast);
}

input, textarea {
  font: inherit;
  color: inherit;
}

/* === Shared Labels === */
.section-kicker,
.nav-links,
.hero__kicker,
.hero__role,
.hero__explore,
.project-card__label,
.about__meta-title,
.contact__footer {
  font-size: var(--label-sm);
  font-weight: 700;
  letter-spacing: 0.4em;
  text-transform: uppercase;
}

.section-kicker {
  opacity: 0.3;
}

.section-title {
  font-family: var(--font-serif);
  font-style: italic;
  font-weight: 300;
  font-size: 2rem;
}

.section-heading {
  padding: 0 2rem;
  margin-bottom: 3rem;
}

/* === Buttons === */
.btn-pill {
  font-size: var(--label-xs);
  font-weight: 700;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--text-primary);
  background: rgba(0, 0, 0, 0.4);
  border: 1px solid var(--line-strong);
  border-radius: 999px;
  padding: 0.6rem 1.25rem;
  cursor: pointer;
  backdrop-filter: blur(12px);
  transition: all var(--transition-fast);
}

.btn-pill:hover {
  background: var(--text-primary);
  color: var(--black);
}

.btn-solid {
  font-size: var(--label-sm);
  font-weight: 700;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  background: var(--text-primary);
  color: var(--black);
  border: none;
  padding: 1rem 2rem;
  cursor: pointer;
  transition: opacity var(--transition-fast);
}

.btn-solid:disabled {
  opacity: 0.5;
  cursor: default;
}

/* === Navigation === */
.nav-bar {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  z-index: 100;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1.5rem 2rem;
  mix-blend-mode: difference;
}

.nav-logo {
  min-width: 40px;
  height: 24px;
  display: flex;
  align-items: center;
  cursor: pointer;
  user-select: none;
}

.nav-logo__img {
  height: 24px;
  width: auto;
  filter: grayscale(1) brightness(2);
}

.nav-logo__ring {
  width: 16px;
  height: 16px;
  border-radius: 50%;
  border: 1px solid var(--line-strong);
}

.nav-right {
  display: flex;
  align-items: center;
  gap: 3rem;
}

.nav-links {
  display: flex;
  gap: 2rem;
  opacity: 0.5;
}

.nav-links a:hover {
  color: var(--text-primary);
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  padding: 0 2rem 6rem;
}

.hero__kicker {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-bottom: 3rem;
  opacity: 0.3;
}

.hero__rule {
  width: 48px;
  height: 1px;
  background: var(--text-primary);
}

.hero__title {
  font-size: clamp(3rem, 12vw, 11rem);
  font-weight: 900;
  line-height: 0.85;
  letter-spacing: -0.05em;
  text-transform: uppercase;
  margin-bottom: 3rem;
}

.hero__title-rest {
  color: var(--text-ghost);
}

.hero__name-input {
  width: 100%;
  background: transparent;
  border: none;
  outline: none;
  text-transform: uppercase;
  font-weight: 900;
}

.hero__footer {
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
  gap: 2rem;
}

.hero__role {
  opacity: 0.4;
  line-height: 1.8;
  max-width: 24rem;
}

.hero__role-input {
  width: 100%;
  margin-top: 0.5rem;
  background: transparent;
  border: none;
  border-bottom: 1px solid var(--line-strong);
  outline: none;
  letter-spacing: inherit;
  text-transform: inherit;
}

/* === Work === */
.work {
  padding: 6rem 0;
  border-top: 1px solid var(--line);
  overflow: hidden;
}

.work__strip {
  display: flex;
  gap: 2rem;
  padding: 0 2rem 3rem;
  overflow-x: auto;
  scroll-snap-type: x mandatory;
  scrollbar-width: none;
}

.work__strip::-webkit-scrollbar {
  display: none;
}

.work__empty {
  height: 12rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: var(--label-sm);
  letter-spacing: 0.2em;
  text-transform: uppercase;
  opacity: 0.2;
}

.project-card {
  position: relative;
  flex-shrink: 0;
  width: 60vw;
  aspect-ratio: 16 / 9;
  background: var(--panel);
  border-radius: 2px;
  overflow: hidden;
  scroll-snap-align: center;
  user-select: none;
}

.project-card__video {
  width: 100%;
  height: 100%;
  object-fit: cover;
  filter: grayscale(1) brightness(0.5);
  transition: filter var(--transition-cinematic);
}

.project-card:hover .project-card__video {
  filter: none;
}

.project-card__missing {
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: var(--label-sm);
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.project-card__shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-slow);
}

.project-card:hover .project-card__shade {
  opacity: 1;
}

.project-card__caption {
  position: absolute;
  left: 2rem;
  bottom: 2rem;
  right: 2rem;
}

.project-card__label {
  color: var(--text-secondary);
  margin-bottom: 0.5rem;
}

.project-card__title,
.project-card__title-input {
  font-family: var(--font-serif);
  font-style: italic;
  font-weight: 300;
  font-size: 1.875rem;
}

.project-card__title-input {
  width: 75%;
  background: rgba(0, 0, 0, 0.6);
  border: none;
  outline: none;
  padding: 0.5rem;
  backdrop-filter: blur(12px);
}

.project-card__remove {
  position: absolute;
  top: 1rem;
  right: 1rem;
  font-size: 8px;
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--text-primary);
  background: rgba(255, 255, 255, 0.1);
  border: none;
  border-radius: 999px;
  padding: 0.5rem 1rem;
  cursor: pointer;
  backdrop-filter: blur(12px);
  transition: background var(--transition-fast);
}

.project-card__remove:hover {
  background: var(--danger);
}

.project-card--add {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  border: 1px solid var(--line);
  background: rgba(23, 23, 23, 0.2);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.project-card--add:hover {
  background: rgba(23, 23, 23, 0.4);
}

.project-card__plus {
  width: 64px;
  height: 64px;
  border-radius: 50%;
  border: 1px solid rgba(255, 255, 255, 0.1);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
  font-weight: 200;
  color: var(--text-muted);
  transition: transform var(--transition-fast);
}

.project-card--add:hover .project-card__plus {
  transform: scale(1.1);
}

.project-card__add-label {
  font-size: var(--label-xs);
  font-weight: 700;
  letter-spacing: 0.5em;
  text-transform: uppercase;
  color: var(--text-muted);
}

/* === About === */
.about {
  display: grid;
  grid-template-columns: 5fr 7fr;
  gap: 6rem;
  padding: 12rem 2rem;
  border-top: 1px solid var(--line);
}

.about__portrait {
  position: sticky;
  top: 6rem;
  aspect-ratio: 4 / 5;
  background: var(--panel);
  overflow: hidden;
  border-radius: 2px;
  filter: grayscale(1);
  transition: filter var(--transition-cinematic);
}

.about__portrait:hover {
  filter: none;
}

.about__portrait-img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transform: scale(1.1);
  transition: transform var(--transition-cinematic);
}

.about__portrait:hover .about__portrait-img {
  transform: scale(1);
}

.about__portrait-change {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.4);
  border: none;
  color: var(--text-primary);
  font-size: var(--label-sm);
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  opacity: 0;
  cursor: pointer;
  transition: opacity var(--transition-fast);
}

.about__portrait-change:hover {
  opacity: 1;
}

.about__body {
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: 4rem;
}

.about__vision {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.about__bio {
  font-family: var(--font-serif);
  font-style: italic;
  font-weight: 300;
  font-size: 3rem;
  line-height: 1.1;
  letter-spacing: -0.02em;
  color: #d4d4d4;
}

.about__bio-input {
  width: 100%;
  height: 16rem;
  background: var(--panel-soft);
  border: 1px solid rgba(255, 255, 255, 0.1);
  border-radius: 2px;
  padding: 2rem;
  font-size: 1.5rem;
  font-weight: 300;
  line-height: 1.6;
  outline: none;
  resize: vertical;
}

.about__bio-input:focus {
  border-color: rgba(255, 255, 255, 0.3);
}

.about__meta {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  padding-top: 3rem;
  border-top: 1px solid var(--line);
}

.about__meta-title {
  font-size: var(--label-xs);
  opacity: 0.2;
  margin-bottom: 1rem;
}

.about__services {
  list-style: none;
}

.about__services,
.about__links {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  font-size: 0.75rem;
  font-weight: 300;
  opacity: 0.4;
}

/* === Contact === */
.contact {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  gap: 3rem;
  padding: 12rem 2rem 3rem;
  border-top: 1px solid var(--line);
}

.contact__email {
  font-size: clamp(2rem, 8vw, 7rem);
  font-weight: 900;
  letter-spacing: -0.05em;
  text-transform: lowercase;
  transition: color var(--transition-slow);
}

.contact__email:hover {
  color: #737373;
}

.contact__at {
  opacity: 0.2;
}

.contact__fields {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  width: min(32rem, 100%);
  text-align: left;
}

.contact__fields label {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  font-size: var(--label-xs);
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--text-secondary);
}

.contact__fields input {
  background: transparent;
  border: none;
  border-bottom: 1px solid var(--line-strong);
  padding: 0.5rem 0;
  outline: none;
  font-size: 1rem;
  letter-spacing: normal;
  text-transform: none;
  color: var(--text-primary);
}

.contact__footer {
  display: flex;
  justify-content: space-between;
  width: 100%;
  padding-top: 6rem;
  font-size: var(--label-xs);
  letter-spacing: 0.3em;
  opacity: 0.2;
}

/* === Enhancement Overlay === */
.enhance-overlay {
  position: fixed;
  inset: 0;
  z-index: 200;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2.5rem;
  background: rgba(0, 0, 0, 0.9);
  backdrop-filter: blur(12px);
}

.enhance-overlay__bar {
  position: relative;
  width: 64px;
  height: 1px;
  background: rgba(255, 255, 255, 0.1);
  overflow: hidden;
}

.enhance-overlay__shimmer {
  position: absolute;
  inset: 0;
  background: var(--text-primary);
  transform: translateX(-100%);
  animation: shimmer 2s infinite;
}

.enhance-overlay__label {
  font-size: var(--label-xs);
  font-weight: 700;
  letter-spacing: 1em;
  text-transform: uppercase;
  animation: pulse 2s ease-in-out infinite;
}

@keyframes shimmer {
  100% { transform: translateX(100%); }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.4; }
}

/* === Edit Mode === */
.portfolio--editing .hero__title,
.portfolio--editing .about__vision {
  outline: 1px dashed rgba(255, 255, 255, 0.08);
  outline-offset: 1rem;
}

/* === Narrow Windows === */
@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .project-card {
    width: 85vw;
  }

  .about {
    grid-template-columns: 1fr;
    gap: 3rem;
  }

  .about__portrait {
    position: relative;
    top: 0;
  }

  .about__bio {
    font-size: 1.875rem;
  }

  .contact__footer {
    flex-direction: column;
    gap: 1rem;
  }
}
"#;
