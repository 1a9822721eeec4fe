use dioxus::prelude::*;
use trail_core::model::AudioTrack;

#[component]
pub fn MediaContent(video_url: String, audio: Vec<AudioTrack>) -> Element {
    rsx! {
        div { class: "media",
            div { class: "card video",
                iframe {
                    src: "{video_url}",
                    title: "Vídeo Educativo",
                    allowfullscreen: true,
                }
            }

            div { class: "card audio",
                h3 { "Áudios Complementares" }
                ul { class: "audio-list",
                    for (index, track) in audio.into_iter().enumerate() {
                        li { key: "{index}", class: "audio-slot",
                            p { class: "audio-title", "{track.title}" }
                            if let Some(src) = track.src {
                                audio { controls: true, src: "{src}" }
                            } else {
                                p { class: "muted",
                                    "🎵 Espaço reservado para o player de áudio {index + 1}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
