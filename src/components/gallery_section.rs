//! Gallery Section Component

use leptos::prelude::*;

use crate::texts::sections;

const IMAGES: &[&str] = &[
    "gallery/01.jpg",
    "gallery/02.jpg",
    "gallery/03.jpg",
    "gallery/04.jpg",
    "gallery/05.jpg",
    "gallery/06.jpg",
    "gallery/07.jpg",
    "gallery/10.jpg",
];

#[component]
pub fn GallerySection() -> impl IntoView {
    view! {
        <section class="gallery-section" id="gallery">
            <h2 class="heading-display">{sections::GALLERY_TITLE}</h2>
            <p class="text-body">{sections::GALLERY_SUBTITLE}</p>
            <div class="divider-ornament"></div>
            <div class="gallery-grid">
                {IMAGES.iter().enumerate().map(|(i, src)| view! {
                    <div class="gallery-tile card-elegant">
                        <img src=*src alt=format!("Galerija {}", i + 1) loading="lazy" />
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
