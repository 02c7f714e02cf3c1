//! Global CSS for the profile page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID */
  --void-black: #000000;

  /* NEON */
  --neon-blue: #3b82f6;
  --neon-cyan: #22d3ee;
  --neon-violet: #a855f7;

  /* TEXT */
  --text-primary: rgba(255, 255, 255, 0.9);
  --text-muted: rgba(255, 255, 255, 0.3);
  --text-faint: rgba(255, 255, 255, 0.2);

  /* GLASS */
  --glass-fill: rgba(255, 255, 255, 0.02);
  --glass-hover: rgba(255, 255, 255, 0.05);
  --glass-border: rgba(255, 255, 255, 0.1);

  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;
  --font-display: 'Space Grotesk', 'Inter', sans-serif;

  --ease-out-expo: cubic-bezier(0.16, 1, 0.3, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--void-black);
  color: var(--text-primary);
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
  min-height: 100vh;
  overflow-x: hidden;
}

::selection {
  background: rgba(255, 255, 255, 0.1);
}

/* === Page Layout === */
.bio-page {
  position: relative;
  min-height: 100vh;
  width: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  overflow-y: auto;
}

.vignette {
  position: fixed;
  inset: 0;
  z-index: 1;
  pointer-events: none;
  background: radial-gradient(ellipse at center, transparent 40%, rgba(0, 0, 0, 0.85) 100%);
}

.bio-content {
  position: relative;
  z-index: 10;
  width: 100%;
  max-width: 42rem;
  padding: 6rem 1.5rem;
  display: flex;
  flex-direction: column;
  align-items: center;
}

@media (min-width: 768px) {
  .bio-content { padding: 10rem 1.5rem; }
}

/* === Background Scene === */
.scene {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
}

.star-field {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
}

.star {
  animation-name: twinkle;
  animation-iteration-count: infinite;
  animation-timing-function: ease-in-out;
}

@keyframes twinkle {
  0%, 100% { filter: brightness(1); }
  50% { filter: brightness(0.35); }
}

.orbit-center {
  position: absolute;
  top: 50%;
  left: 50%;
  width: 0;
  height: 0;
}

.orbit-plane {
  position: absolute;
  top: 0;
  left: 0;
}

.orbit-path {
  position: absolute;
  inset: 0;
  animation-name: orbit;
  animation-iteration-count: infinite;
  animation-timing-function: linear;
}

.planet {
  position: absolute;
  top: 50%;
  right: 0;
  transform: translate(50%, -50%);
  border-radius: 50%;
  opacity: 0.6;
}

.planet-ring {
  position: absolute;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  border: 1px solid;
  border-radius: 50%;
  opacity: 0.35;
}

@keyframes orbit {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}

/* === Profile Header === */
.profile-header {
  display: flex;
  flex-direction: column;
  align-items: center;
  margin-bottom: 4rem;
  text-align: center;
  animation: rise-in 1.5s var(--ease-out-expo) both;
}

.avatar-frame {
  position: relative;
  margin-bottom: 2rem;
}

.avatar-glow {
  position: absolute;
  inset: -2px;
  z-index: 0;
  pointer-events: none;
}

.avatar-glow__pulse {
  position: absolute;
  inset: 0;
  border-radius: 50%;
  border: 2px solid var(--neon-cyan);
  animation: neon-pulse 2s ease-in-out infinite;
}

.avatar-glow__sweep {
  position: absolute;
  inset: -4px;
  border-radius: 50%;
  background: conic-gradient(var(--neon-cyan), var(--neon-violet), var(--neon-cyan));
  -webkit-mask: radial-gradient(farthest-side, transparent calc(100% - 1px), #000 calc(100% - 1px));
  mask: radial-gradient(farthest-side, transparent calc(100% - 1px), #000 calc(100% - 1px));
  opacity: 0.5;
  animation: orbit 4s linear infinite;
}

@keyframes neon-pulse {
  0%, 100% {
    box-shadow: 0 0 5px var(--neon-blue), 0 0 10px var(--neon-blue);
    border-color: var(--neon-blue);
  }
  50% {
    box-shadow: 0 0 10px var(--neon-violet), 0 0 20px var(--neon-violet);
    border-color: var(--neon-violet);
  }
}

.avatar-scanlines {
  position: absolute;
  inset: 0;
  z-index: 20;
  border-radius: 50%;
  overflow: hidden;
  pointer-events: none;
  opacity: 0.2;
  background:
    linear-gradient(rgba(18, 16, 16, 0) 50%, rgba(0, 0, 0, 0.25) 50%),
    linear-gradient(90deg, rgba(255, 0, 0, 0.06), rgba(0, 255, 0, 0.02), rgba(0, 0, 255, 0.06));
  background-size: 100% 2px, 3px 100%;
}

.avatar-orbit {
  position: absolute;
  border-radius: 50%;
  animation-name: orbit;
  animation-iteration-count: infinite;
  animation-timing-function: linear;
}

.avatar-orbit--bright { border: 1px solid rgba(255, 255, 255, 0.1); }
.avatar-orbit--dim { border: 1px solid rgba(255, 255, 255, 0.05); }
.avatar-orbit--faint { border: 1px solid rgba(255, 255, 255, 0.02); }

.avatar-image {
  position: relative;
  z-index: 10;
  width: 7rem;
  height: 7rem;
  border-radius: 50%;
  overflow: hidden;
}

@media (min-width: 768px) {
  .avatar-image { width: 9rem; height: 9rem; }
}

.avatar-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  filter: grayscale(1) brightness(0.75) contrast(1.25) sepia(0.5) hue-rotate(180deg);
  opacity: 0.9;
}

.avatar-flicker {
  position: absolute;
  inset: 0;
  background: var(--neon-cyan);
  mix-blend-mode: overlay;
  pointer-events: none;
  animation: flicker 2s infinite;
}

@keyframes flicker {
  0%, 50%, 100% { opacity: 0; }
  25% { opacity: 0.2; }
  75% { opacity: 0.1; }
}

/* === Glitch Title === */
.glitch-wrapper {
  margin-bottom: 1.5rem;
}

.glitch-text {
  position: relative;
  font-family: var(--font-display);
  font-size: 2.5rem;
  font-weight: 700;
  letter-spacing: 0.05em;
  color: #ffffff;
}

.glitch-text::before,
.glitch-text::after {
  content: attr(data-text);
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  overflow: hidden;
}

.glitch-text::before {
  left: 2px;
  text-shadow: -2px 0 var(--neon-cyan);
  clip-path: inset(0 0 60% 0);
  animation: glitch-slice 3s infinite linear alternate-reverse;
}

.glitch-text::after {
  left: -2px;
  text-shadow: -2px 0 var(--neon-violet);
  clip-path: inset(60% 0 0 0);
  animation: glitch-slice 2.5s infinite linear alternate-reverse;
}

@keyframes glitch-slice {
  0% { clip-path: inset(10% 0 80% 0); }
  20% { clip-path: inset(60% 0 10% 0); }
  40% { clip-path: inset(30% 0 50% 0); }
  60% { clip-path: inset(80% 0 5% 0); }
  80% { clip-path: inset(5% 0 70% 0); }
  100% { clip-path: inset(45% 0 40% 0); }
}

/* === Links === */
.link-list {
  width: 100%;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-bottom: 5rem;
}

.link-card {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem;
  border-radius: 1rem;
  border: 1px solid var(--glass-border);
  background: var(--glass-fill);
  backdrop-filter: blur(12px);
  text-decoration: none;
  color: inherit;
  transition: transform 300ms ease, background 300ms ease;
  animation: rise-in 0.8s var(--ease-out-expo) both;
}

.link-card:hover {
  transform: scale(1.02);
  background: var(--glass-hover);
}

.link-card:active {
  transform: scale(0.98);
}

.link-card__body {
  display: flex;
  align-items: center;
  gap: 1.25rem;
}

.link-card__icon {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 0.75rem;
  background: rgba(255, 255, 255, 0.05);
  display: flex;
  align-items: center;
  justify-content: center;
  color: rgba(255, 255, 255, 0.6);
  transition: color 300ms ease;
}

.link-card:hover .link-card__icon { color: #ffffff; }

.link-card__text {
  display: flex;
  flex-direction: column;
}

.link-card__name {
  font-size: 1.125rem;
  font-weight: 600;
  color: var(--text-primary);
}

.link-card__label {
  font-size: 0.75rem;
  color: var(--text-muted);
}

.external-link-icon {
  color: rgba(255, 255, 255, 0.1);
  transition: color 300ms ease;
}

.link-card:hover .external-link-icon { color: rgba(255, 255, 255, 0.4); }

@keyframes rise-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Footer === */
.bio-footer {
  width: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
  padding-top: 3rem;
  border-top: 1px solid rgba(255, 255, 255, 0.05);
  animation: fade-in 1s ease 1.2s both;
}

.bio-footer__tagline {
  font-size: 10px;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.4em;
  color: var(--text-faint);
}

.bio-footer__divider {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  color: rgba(255, 255, 255, 0.05);
}

.bio-footer__rule {
  width: 2rem;
  height: 1px;
  background: currentColor;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
