//! Optional feature fragments.
//!
//! A feature toggles an HTML fragment substituted into page markers and, for
//! some features, a script block appended to the synthesized `main.js`. HTML
//! markers for unrequested features stay literal in the page; script blocks
//! for unrequested features are omitted from `main.js` entirely. That
//! asymmetry is part of the output contract.

/// Feature names the generator knows about.
pub const KNOWN_FEATURES: [&str; 4] = ["contact_form", "gallery", "map", "social_media"];

/// HTML fragment for a feature. Unknown features yield an empty string, so
/// their markers are blanked rather than left dangling once requested.
#[must_use]
pub fn html_fragment(feature: &str) -> &'static str {
    match feature {
        "contact_form" => CONTACT_FORM_HTML,
        "gallery" => GALLERY_HTML,
        "map" => MAP_HTML,
        "social_media" => SOCIAL_MEDIA_HTML,
        _ => "",
    }
}

/// Script block appended to `main.js` for a feature, if the feature has
/// script behavior. `map` and `social_media` are HTML-only.
#[must_use]
pub fn script_block(feature: &str) -> Option<&'static str> {
    match feature {
        "contact_form" => Some(CONTACT_FORM_JS),
        "gallery" => Some(GALLERY_JS),
        _ => None,
    }
}

const CONTACT_FORM_HTML: &str = r#"
<div class="contact-form-container">
    <h2>Contact Us</h2>
    <form class="contact-form">
        <div class="form-group">
            <label for="name">Name</label>
            <input type="text" id="name" name="name" required>
        </div>
        <div class="form-group">
            <label for="email">Email</label>
            <input type="email" id="email" name="email" required>
        </div>
        <div class="form-group">
            <label for="message">Message</label>
            <textarea id="message" name="message" rows="5" required></textarea>
        </div>
        <button type="submit">Send Message</button>
    </form>
</div>
"#;

const GALLERY_HTML: &str = r#"
<div class="gallery">
    <div class="gallery-item">
        <img src="https://via.placeholder.com/300x200?text=Image+1" alt="Gallery Image 1">
    </div>
    <div class="gallery-item">
        <img src="https://via.placeholder.com/300x200?text=Image+2" alt="Gallery Image 2">
    </div>
    <div class="gallery-item">
        <img src="https://via.placeholder.com/300x200?text=Image+3" alt="Gallery Image 3">
    </div>
    <div class="gallery-item">
        <img src="https://via.placeholder.com/300x200?text=Image+4" alt="Gallery Image 4">
    </div>
</div>
"#;

const MAP_HTML: &str = r#"
<div class="map-container">
    <h2>Our Location</h2>
    <div class="map-placeholder">
        <p>Map goes here. In a real implementation, this would be an interactive map.</p>
        <p>123 Main Street, Anytown, USA</p>
    </div>
</div>
"#;

const SOCIAL_MEDIA_HTML: &str = r##"
<div class="social-links">
    <h2>Follow Us</h2>
    <div class="social-icons">
        <a href="#" class="social-icon">Facebook</a>
        <a href="#" class="social-icon">Twitter</a>
        <a href="#" class="social-icon">Instagram</a>
        <a href="#" class="social-icon">LinkedIn</a>
    </div>
</div>
"##;

/// Intercepts submission and acknowledges with a placeholder; no network call.
const CONTACT_FORM_JS: &str = r#"
    // Initialize contact form
    const contactForm = document.querySelector('.contact-form');
    if (contactForm) {
        contactForm.addEventListener('submit', function(e) {
            e.preventDefault();
            alert('Thank you for your message! This is a demo form.');
        });
    }
"#;

/// Click-to-enlarge lightbox with an explicit close control.
const GALLERY_JS: &str = r#"
    // Initialize image gallery
    const gallery = document.querySelector('.gallery');
    if (gallery) {
        const images = gallery.querySelectorAll('img');
        images.forEach(img => {
            img.addEventListener('click', function() {
                const lightbox = document.createElement('div');
                lightbox.className = 'lightbox';
                lightbox.innerHTML = `<div class="lightbox-content"><img src="${img.src}"><span>&times;</span></div>`;
                document.body.appendChild(lightbox);

                lightbox.querySelector('span').addEventListener('click', function() {
                    document.body.removeChild(lightbox);
                });
            });
        });
    }
"#;
