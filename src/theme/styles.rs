//! Global CSS styles for the café site.
//!
//! Warm espresso-and-gold look. Breakpoints: 640px (sm), 768px (md), 1024px (lg).

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --night: #0d0d0e;
  --espresso: #18130f;
  --cream: #faf6ef;
  --paper: #ffffff;

  /* Accents */
  --gold: #EDB95E;
  --gold-dark: #d9a441;
  --caramel: #c7a17a;
  --caramel-dark: #a9825b;

  /* Text */
  --ink: #1f1b16;
  --ink-muted: #6b6258;
  --text-on-dark: #f5f1ea;
  --text-on-dark-muted: rgba(245, 241, 234, 0.7);

  /* Semantic */
  --success: #3c8d5a;
  --danger: #c0392b;

  /* Typography */
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;

  --radius: 14px;
  --shadow: 0 18px 40px rgba(13, 13, 14, 0.12);
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
  font-family: var(--font-sans);
  background: var(--cream);
  color: var(--ink);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

img, video, iframe {
  display: block;
  max-width: 100%;
}

a {
  color: inherit;
  text-decoration: none;
}

h1, h2, h3, h4 {
  font-family: var(--font-serif);
  line-height: 1.2;
}

@media (prefers-reduced-motion: reduce) {
  html { scroll-behavior: auto; }
  .gallery__track { animation: none; }
}

/* === Utilities === */
.centered { text-align: center; }
.accent { color: var(--gold); }
.accent-icon { color: var(--gold); margin-right: 0.5rem; }
.caramel { color: var(--caramel); }
.muted { color: var(--ink-muted); }
.small { font-size: 0.875rem; }

.hide-below-sm { display: none; }
.hide-below-lg { display: none; }
@media (min-width: 640px) { .hide-below-sm { display: inline-flex; } }
@media (min-width: 1024px) { .hide-below-lg { display: inline-flex; } }

.section {
  padding: 5rem 1.25rem;
}

.eyebrow {
  font-size: 0.8rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--gold-dark);
  margin-bottom: 0.75rem;
}

.section-title {
  font-size: clamp(2rem, 4vw, 2.75rem);
  margin-bottom: 1rem;
}

.section-lead {
  max-width: 40rem;
  margin: 0 auto 2.5rem;
  color: var(--ink-muted);
}

.body-text {
  color: var(--ink-muted);
  margin-bottom: 1rem;
}

.card {
  background: var(--paper);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  padding: 2rem;
}

/* === Buttons === */
.btn-primary, .btn-outline, .btn-caramel, .btn-pill, .icon-btn, .close-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border: none;
  cursor: pointer;
  font: inherit;
  font-weight: 600;
  transition: background var(--transition-fast), color var(--transition-fast),
    transform var(--transition-fast);
}

.btn-primary {
  background: var(--gold);
  color: var(--night);
  padding: 0.75rem 1.75rem;
  border-radius: 999px;
}
.btn-primary:hover { background: var(--gold-dark); }

.btn-outline {
  background: transparent;
  color: var(--text-on-dark);
  border: 1px solid var(--gold);
  padding: 0.6rem 1.4rem;
  border-radius: 999px;
}
.btn-outline:hover { background: var(--gold); color: var(--night); }

.btn-caramel {
  background: var(--caramel);
  color: var(--paper);
  padding: 0.75rem 1.75rem;
  border-radius: 999px;
}
.btn-caramel:hover { background: var(--caramel-dark); }

.btn-pill {
  background: var(--night);
  color: var(--gold);
  padding: 0.8rem 2.25rem;
  border-radius: 999px;
  letter-spacing: 0.08em;
  text-transform: uppercase;
}
.btn-pill:hover { transform: translateY(-2px); }

.btn-primary:disabled, .btn-caramel:disabled {
  opacity: 0.6;
  cursor: wait;
}

.wide { width: 100%; }

.icon-btn, .close-btn {
  background: transparent;
  color: var(--text-on-dark);
  font-size: 1.5rem;
  padding: 0.25rem 0.5rem;
}

.hamburger { display: inline-flex; }
@media (min-width: 768px) { .hamburger { display: none; } }

/* === Top Bar === */
.top-bar {
  display: none;
  background: var(--night);
  color: var(--text-on-dark-muted);
  font-size: 0.8rem;
}
@media (min-width: 1024px) { .top-bar { display: block; } }

.top-bar__inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0.5rem 1.25rem;
  display: flex;
  justify-content: space-between;
}

.top-bar__group {
  display: flex;
  gap: 1.5rem;
}

.top-bar__item:hover, .top-bar__group a:hover { color: var(--gold); }

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 40;
  background: rgba(13, 13, 14, 0.92);
  backdrop-filter: blur(8px);
  color: var(--text-on-dark);
}

.site-header__inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0.75rem 1.25rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.site-header__logo {
  border-radius: 50%;
}

.site-header__nav {
  display: none;
  gap: 2rem;
}
@media (min-width: 768px) { .site-header__nav { display: flex; } }

.nav-link {
  font-size: 0.95rem;
  transition: color var(--transition-fast);
}
.nav-link:hover { color: var(--gold); }

.site-header__actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

/* === Follower Badge === */
.follower-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.3rem 0.75rem;
  border-radius: 999px;
  background: rgba(237, 185, 94, 0.12);
}

.social-icon { color: var(--gold); font-weight: 700; }

.follower-count {
  font-variant-numeric: tabular-nums;
  min-width: 3.5ch;
}
.follower-count.loading { opacity: 0.6; }
.follower-count.error { color: var(--danger); }

/* === Mobile Nav === */
.mobile-nav {
  position: fixed;
  inset: 0;
  z-index: 50;
  pointer-events: none;
}
.mobile-nav.open { pointer-events: auto; }

.mobile-nav__backdrop {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.55);
  opacity: 0;
  transition: opacity var(--transition-normal);
}
.mobile-nav.open .mobile-nav__backdrop { opacity: 1; }

.mobile-nav__panel {
  position: absolute;
  top: 0;
  right: 0;
  height: 100%;
  width: min(20rem, 85vw);
  background: var(--night);
  color: var(--text-on-dark);
  padding: 1.25rem;
  transform: translateX(100%);
  transition: transform var(--transition-normal);
}
.mobile-nav.open .mobile-nav__panel { transform: translateX(0); }

.mobile-nav__top {
  display: flex;
  justify-content: flex-end;
}

.mobile-nav__links {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  margin-top: 2rem;
}

.mobile-nav-item {
  font-size: 1.15rem;
  border-bottom: 1px solid rgba(255, 255, 255, 0.08);
  padding-bottom: 0.75rem;
}
.mobile-nav-item:hover { color: var(--gold); }

.mobile-nav__cta { margin-top: 1rem; }

@media (min-width: 768px) { .mobile-nav { display: none; } }

/* === Hero === */
.hero {
  position: relative;
  min-height: 88vh;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-on-dark);
  overflow: hidden;
}

.hero__media, .hero__shade {
  position: absolute;
  inset: 0;
}

.hero__video {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero__shade {
  background: linear-gradient(180deg, rgba(13, 13, 14, 0.55), rgba(13, 13, 14, 0.8));
}

.hero__content {
  position: relative;
  max-width: 44rem;
  padding: 0 1.25rem;
  text-align: center;
}

.hero__title {
  font-size: clamp(2.5rem, 6vw, 4.25rem);
  margin-bottom: 1.25rem;
}

.hero__lead {
  color: var(--text-on-dark-muted);
  margin-bottom: 2rem;
}

.hero__actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  justify-content: center;
}

/* === About === */
.about__grid {
  max-width: 72rem;
  margin: 0 auto;
  display: grid;
  gap: 3rem;
  align-items: center;
}
@media (min-width: 1024px) { .about__grid { grid-template-columns: 1fr 1fr; } }

.about__image img {
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  width: 100%;
  object-fit: cover;
}

.about__quote {
  border-left: 3px solid var(--gold);
  padding-left: 1rem;
  font-family: var(--font-serif);
  font-style: italic;
}

/* === Events Carousel === */
.events {
  background: var(--night);
  color: var(--text-on-dark);
  padding: 5rem 1.25rem;
}

.events__inner {
  max-width: 72rem;
  margin: 0 auto;
  text-align: center;
}

.events__title {
  font-size: clamp(2rem, 4vw, 2.75rem);
  margin-bottom: 1rem;
}

.events__lead {
  color: var(--text-on-dark-muted);
  max-width: 40rem;
  margin: 0 auto 2.5rem;
}

.events__viewport { overflow: hidden; }

.events__track {
  display: flex;
  transition: transform 600ms ease;
}

.event-slide { padding: 0 0.75rem; }

.event-slide__card {
  position: relative;
  height: 22rem;
  border-radius: var(--radius);
  background-size: cover;
  background-position: center;
  overflow: hidden;
}

.event-slide__shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(180deg, transparent 30%, rgba(13, 13, 14, 0.85));
}

.event-slide__body {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 1.5rem;
  text-align: left;
}

.event-slide__body h3 {
  color: var(--gold);
  margin-bottom: 0.4rem;
}

.events__pagination {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1.75rem;
}

.bullet {
  width: 10px;
  height: 10px;
  border-radius: 50%;
  border: none;
  background: rgba(245, 241, 234, 0.35);
  cursor: pointer;
}
.bullet.active { background: var(--gold); }

/* === Menu === */
.menu__inner {
  max-width: 48rem;
  margin: 0 auto;
}

.menu__list { list-style: none; }

.menu-item { padding: 1.25rem 0; }
.menu-item.separated { border-bottom: 1px dashed rgba(31, 27, 22, 0.15); }

.menu-item__head {
  display: flex;
  align-items: baseline;
  gap: 0.75rem;
}

.menu-item__name { font-size: 1.2rem; }

.menu-item__rule {
  flex: 1;
  border-bottom: 1px dotted var(--caramel);
}

.menu-item__price-wrap { white-space: nowrap; }

.menu-item__price {
  color: var(--caramel-dark);
  font-weight: 700;
}

.menu-item__desc {
  color: var(--ink-muted);
  font-size: 0.9rem;
  margin-top: 0.3rem;
}

.menu__more { margin-top: 2.5rem; }

/* === Gallery === */
.gallery { overflow: hidden; }

.gallery__title {
  font-size: clamp(2rem, 4vw, 2.75rem);
  margin-bottom: 2rem;
}

.gallery__viewport { overflow: hidden; }

.gallery__track {
  display: flex;
  width: max-content;
  gap: 1rem;
  animation: gallery-scroll 50s linear infinite;
}
.gallery__track:hover { animation-play-state: paused; }

.gallery__item img {
  width: 18rem;
  height: 13rem;
  object-fit: cover;
  border-radius: var(--radius);
}

@keyframes gallery-scroll {
  from { transform: translateX(0); }
  to { transform: translateX(-50%); }
}

/* === Forms === */
.form-grid {
  display: grid;
  gap: 1rem;
}

.form-row {
  display: grid;
  gap: 1rem;
}
@media (min-width: 640px) { .form-row { grid-template-columns: 1fr 1fr; } }

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.input-label {
  font-size: 0.85rem;
  font-weight: 600;
}

.input-field {
  font: inherit;
  padding: 0.7rem 0.9rem;
  border: 1px solid rgba(31, 27, 22, 0.18);
  border-radius: 10px;
  background: var(--paper);
  color: var(--ink);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}
.input-field:focus {
  outline: none;
  border-color: var(--gold);
  box-shadow: 0 0 0 3px rgba(237, 185, 94, 0.25);
}
.input-field.textarea { resize: vertical; }

.form-notice {
  margin-top: 1rem;
  padding: 0.75rem 1rem;
  border-radius: 10px;
  font-size: 0.9rem;
}
.form-notice.success { background: rgba(60, 141, 90, 0.12); color: var(--success); }
.form-notice.error { background: rgba(192, 57, 43, 0.1); color: var(--danger); }

/* === Contact === */
.contact__inner {
  max-width: 72rem;
  margin: 0 auto;
}

.contact__grid {
  display: grid;
  gap: 2rem;
}
@media (min-width: 1024px) { .contact__grid { grid-template-columns: 1fr 1fr; } }

.contact__details {
  display: grid;
  gap: 0.5rem;
  margin-top: 1.5rem;
  color: var(--ink-muted);
  font-size: 0.9rem;
}

.contact__map iframe {
  width: 100%;
  height: 24rem;
  border: 0;
  border-radius: var(--radius);
}

.contact__note {
  margin-top: 1rem;
  color: var(--ink-muted);
  font-size: 0.9rem;
}

/* === Reservation === */
.reservation {
  position: relative;
  overflow: hidden;
}

.reservation__backdrop, .reservation__shade {
  position: absolute;
  inset: 0;
}

.reservation__backdrop img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.reservation__shade { background: rgba(13, 13, 14, 0.65); }

.reservation__inner {
  position: relative;
  max-width: 44rem;
  margin: 0 auto;
}

.reservation__card {
  background: rgba(255, 255, 255, 0.96);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  padding: 2.5rem 2rem;
}

.reservation__form { margin-top: 1.5rem; }

.reservation__footer {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

/* === Footer === */
.site-footer {
  background: var(--night);
  color: var(--text-on-dark-muted);
  padding: 4rem 1.25rem 1.5rem;
}

.site-footer__grid {
  max-width: 72rem;
  margin: 0 auto;
  display: grid;
  gap: 2.5rem;
}
@media (min-width: 768px) { .site-footer__grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .site-footer__grid { grid-template-columns: repeat(4, 1fr); } }

.site-footer h4 {
  color: var(--gold);
  margin-bottom: 1rem;
}

.site-footer__brand img {
  border-radius: 50%;
  margin-bottom: 1rem;
}

.site-footer__list {
  list-style: none;
  display: grid;
  gap: 0.4rem;
}

.site-footer__photos {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.4rem;
}

.site-footer__photos img {
  aspect-ratio: 1;
  object-fit: cover;
  border-radius: 6px;
}

.site-footer__bottom {
  max-width: 72rem;
  margin: 3rem auto 0;
  padding-top: 1.5rem;
  border-top: 1px solid rgba(255, 255, 255, 0.08);
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: 1rem;
  font-size: 0.85rem;
}

.site-footer__legal {
  display: flex;
  gap: 1.5rem;
}
.site-footer__legal a:hover { color: var(--gold); }

/* === Not Found === */
.not-found {
  min-height: 70vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.25rem;
  text-align: center;
  padding: 2rem;
}

.not-found__path {
  font-family: monospace;
  color: var(--ink-muted);
}
"#;
