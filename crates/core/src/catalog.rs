//! The trail shipped with the app.

use crate::model::{
    AudioTrack, GalleryPage, Resource, ResourceContent, ResourceId, Trail, TrailError,
};

const GALLERY_PAGES: &[(&str, &str)] = &[
    (
        "https://images.unsplash.com/photo-1542273917363-3b1817f69a2d?w=1200&h=800&fit=crop",
        "A exuberante Mata Atlântica brasileira",
    ),
    (
        "https://images.unsplash.com/photo-1511497584788-876760111969?w=1200&h=800&fit=crop",
        "Florestas tropicais são o lar de milhares de espécies",
    ),
    (
        "https://images.unsplash.com/photo-1473448912268-2022ce9509d8?w=1200&h=800&fit=crop",
        "As árvores são essenciais para a vida no planeta",
    ),
    (
        "https://images.unsplash.com/photo-1586348943529-beaae6c28db9?w=1200&h=800&fit=crop",
        "A preservação das florestas depende de todos nós",
    ),
    (
        "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=1200&h=800&fit=crop",
        "Caminhos verdes na floresta",
    ),
    (
        "https://images.unsplash.com/photo-1518495973542-4542c06a5843?w=1200&h=800&fit=crop",
        "A diversidade da flora nas florestas tropicais",
    ),
];

const VIDEO_URL: &str = "https://www.youtube.com/embed/278IRQ6HSi4";
const QUIZ_URL: &str = "https://wayground.com/embed/quiz/653735a59e4c700cd6ab0254";
const AUDIO_SLOTS: usize = 3;

impl Trail {
    /// The three-stop "Guardiões da Floresta" trail: gallery, media, quiz.
    ///
    /// # Errors
    ///
    /// Returns `TrailError` only if the built-in catalog is malformed.
    pub fn guardians_of_the_forest() -> Result<Self, TrailError> {
        let gallery = Resource::new(
            ResourceId::new(0),
            "Conhecendo as Florestas",
            "Galeria de imagens das florestas",
            "Explore as belezas da Mata Atlântica e da Floresta de Cantanhez através desta galeria de imagens.",
            ResourceContent::Gallery {
                pages: GALLERY_PAGES
                    .iter()
                    .map(|(url, caption)| GalleryPage::new(*url, *caption))
                    .collect(),
            },
        )
        .with_decoration("🖼️", "accent-green");

        let media = Resource::new(
            ResourceId::new(1),
            "Aprendendo com Vídeos e Áudios",
            "Conteúdos em vídeo e áudio",
            "Assista ao vídeo e ouça os áudios para aprender mais sobre as florestas.",
            ResourceContent::Media {
                video_url: VIDEO_URL.to_owned(),
                audio: (1..=AUDIO_SLOTS)
                    .map(|n| AudioTrack::placeholder(format!("Áudio {n}")))
                    .collect(),
            },
        )
        .with_decoration("🎬", "accent-blue");

        let quiz = Resource::new(
            ResourceId::new(2),
            "Quiz dos Guardiões",
            "Teste seus conhecimentos",
            "Responda às perguntas e descubra o quanto você sabe sobre a preservação das florestas!",
            ResourceContent::Quiz {
                embed_url: QUIZ_URL.to_owned(),
            },
        )
        .with_decoration("🎯", "accent-orange");

        Trail::new(vec![gallery, media, quiz])
    }
}
