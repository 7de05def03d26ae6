//! Global CSS styles for the portfolio.
//!
//! Class names match the ones the components toggle: `navbar scrolled`,
//! `nav-links active`, `form-control invalid`, `form-message success|error`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --primary: #2563eb;
  --primary-color: var(--primary);
  --primary-dark: #1d4ed8;
  --secondary: #64748b;
  --surface: #ffffff;
  --surface-alt: #f8fafc;
  --border: #e2e8f0;

  --text-primary: #1e293b;
  --text-secondary: #475569;

  --success: #16a34a;
  --success-bg: #dcfce7;
  --danger: #dc2626;
  --danger-bg: #fee2e2;

  --font-sans: 'Poppins', 'Segoe UI', system-ui, sans-serif;

  --shadow-sm: 0 2px 8px rgba(0, 0, 0, 0.06);
  --shadow-md: 0 4px 20px rgba(0, 0, 0, 0.1);

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
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
  color: var(--text-primary);
  background: var(--surface);
  line-height: 1.6;
}

a {
  color: var(--primary);
  text-decoration: none;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  background: transparent;
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.navbar.scrolled {
  background: rgba(255, 255, 255, 0.97);
  box-shadow: var(--shadow-md);
}

.nav-container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 1rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo {
  font-size: 1.4rem;
  font-weight: 700;
  color: var(--text-primary);
}

.nav-links {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-links a {
  color: var(--text-secondary);
  font-weight: 500;
  transition: color var(--transition-fast);
}

.nav-links a:hover,
.nav-links a.active {
  color: var(--primary);
}

.mobile-menu {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
}

.mobile-menu .bar {
  width: 25px;
  height: 3px;
  background: var(--text-primary);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.mobile-menu.active .bar:nth-child(1) {
  transform: translateY(8px) rotate(45deg);
}

.mobile-menu.active .bar:nth-child(2) {
  opacity: 0;
}

.mobile-menu.active .bar:nth-child(3) {
  transform: translateY(-8px) rotate(-45deg);
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 6rem 1.5rem 3rem;
  background: linear-gradient(135deg, #eff6ff 0%, #ffffff 100%);
}

.hero-title {
  font-size: 3rem;
  margin-bottom: 1rem;
}

.hero-title .highlight {
  color: var(--primary);
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.hero-buttons {
  display: flex;
  gap: 1rem;
  justify-content: center;
  flex-wrap: wrap;
}

.scroll-hint {
  display: inline-block;
  margin-top: 3rem;
  color: var(--secondary);
}

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.75rem 1.75rem;
  border-radius: 8px;
  border: 2px solid transparent;
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn:hover:not(:disabled) {
  transform: translateY(-2px);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-primary {
  background: var(--primary);
  color: #fff;
}

.btn-primary:hover:not(:disabled) {
  background: var(--primary-dark);
}

.btn-secondary {
  background: transparent;
  color: var(--primary);
  border-color: var(--primary);
}

/* === Sections === */
.section {
  max-width: 1200px;
  margin: 0 auto;
  padding: 5rem 1.5rem;
}

.section.alt {
  background: var(--surface-alt);
  max-width: none;
}

.section.page-top {
  padding-top: 8rem;
}

.section-title {
  font-size: 2.25rem;
  text-align: center;
  margin-bottom: 3rem;
}

.section-cta {
  text-align: center;
  margin-top: 2rem;
}

/* === Cards === */
.experience-item,
.education-card,
.project-card,
.skill-category,
.cert-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  padding: 1.75rem;
  box-shadow: var(--shadow-sm);
}

.timeline {
  display: grid;
  gap: 1.5rem;
  max-width: 800px;
  margin: 0 auto;
}

.timeline-period {
  font-size: 0.85rem;
  color: var(--primary);
  font-weight: 600;
}

.education-grid,
.skills-grid,
.projects-grid,
.cert-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 1.5rem;
  max-width: 1200px;
  margin: 0 auto;
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 1rem;
}

.tag {
  font-size: 0.8rem;
  padding: 0.2rem 0.7rem;
  border-radius: 999px;
  background: #eff6ff;
  color: var(--primary);
}

/* === Skill Bars === */
.skill-item {
  margin-top: 1.25rem;
}

.skill-info {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.4rem;
  font-size: 0.95rem;
}

.skill-bar {
  height: 8px;
  background: var(--border);
  border-radius: 4px;
  overflow: hidden;
}

.skill-progress {
  height: 100%;
  width: 0;
  background: linear-gradient(90deg, var(--primary), #60a5fa);
  border-radius: 4px;
  transition: width 1.5s ease;
}

/* === Contact Form === */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1.5fr;
  gap: 3rem;
}

.form-group {
  display: flex;
  flex-direction: column;
  margin-bottom: 1.25rem;
}

.form-group label {
  font-weight: 500;
  margin-bottom: 0.4rem;
}

.form-control {
  font: inherit;
  padding: 0.75rem 1rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  transition: border-color var(--transition-fast);
}

.form-control:focus {
  outline: none;
  border-color: var(--primary);
}

.form-control:disabled {
  background: var(--surface-alt);
  cursor: progress;
}

.form-control.invalid {
  border-color: var(--danger);
}

.error-message {
  min-height: 1.2rem;
  margin-top: 0.3rem;
  font-size: 0.85rem;
  color: var(--danger);
}

.form-message {
  margin-top: 1.25rem;
  padding: 1rem;
  border-radius: 8px;
}

.form-message.success {
  background: var(--success-bg);
  color: var(--success);
}

.form-message.error {
  background: var(--danger-bg);
  color: var(--danger);
}

/* === Scroll To Top === */
.scroll-to-top:focus-visible {
  outline: 2px solid var(--primary-dark);
  outline-offset: 2px;
}

/* === Responsive === */
@media (max-width: 768px) {
  .mobile-menu {
    display: flex;
  }

  .nav-links {
    position: fixed;
    top: 64px;
    left: -100%;
    width: 100%;
    flex-direction: column;
    align-items: center;
    gap: 1.5rem;
    padding: 2rem 0;
    background: var(--surface);
    box-shadow: var(--shadow-md);
    transition: left var(--transition-normal);
  }

  .nav-links.active {
    left: 0;
  }

  .hero-title {
    font-size: 2.25rem;
  }

  .contact-grid {
    grid-template-columns: 1fr;
  }
}
"#;
