use std::sync::Arc;

use services::TrailService;
use trail_core::VisitOutcome;
use trail_core::model::{GalleryPage, Resource, ResourceContent, ResourceId, Trail};

use super::test_harness::{
    ViewHarness, ViewKind, mount_view, setup_custom_trail, setup_trail, setup_view_harness,
};

fn one_page_gallery_trail() -> Trail {
    Trail::new(vec![
        Resource::new(
            ResourceId::new(0),
            "Galeria",
            "d",
            "f",
            ResourceContent::Gallery {
                pages: vec![GalleryPage::new("https://example.com/p.jpg", "Única página")],
            },
        ),
        Resource::new(
            ResourceId::new(1),
            "Quiz",
            "d",
            "f",
            ResourceContent::Quiz {
                embed_url: "https://example.com/quiz".into(),
            },
        ),
    ])
    .expect("valid trail")
}

async fn settle(harness: &mut ViewHarness) {
    for _ in 0..5 {
        harness.drive_async().await;
    }
}

async fn finish_gallery(trail: &Arc<TrailService>) {
    let VisitOutcome::Opened(mut visit) = trail.visit("0").await else {
        panic!("gallery should open");
    };
    visit.report_consumed();
    visit.settle();
    trail.go_next(&mut visit).await.expect("advance past gallery");
}

#[tokio::test(flavor = "current_thread")]
async fn landing_invites_to_start_a_fresh_trail() {
    let mut harness = setup_view_harness(ViewKind::Landing).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Iniciar Trilha"), "missing start cta in {html}");
    assert!(html.contains("Você completou 0 de 3 etapas"), "missing summary in {html}");
    assert!(html.contains("0%"), "missing percentage in {html}");
    assert!(html.contains("Bloqueado"), "missing locked badge in {html}");
    assert!(!html.contains("Resetar"), "reset shown without progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn landing_offers_to_continue_after_progress() {
    let trail = setup_trail().await;
    finish_gallery(&trail).await;

    let mut harness = mount_view(ViewKind::Landing, trail);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Continuar Trilha"), "missing continue cta in {html}");
    assert!(html.contains("Você completou 1 de 3 etapas"), "missing summary in {html}");
    assert!(html.contains("33%"), "missing percentage in {html}");
    assert!(html.contains("Concluído"), "missing completed badge in {html}");
    assert!(html.contains("Resetar"), "missing reset control in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn landing_celebrates_a_finished_trail() {
    let trail = setup_trail().await;
    finish_gallery(&trail).await;
    for raw in ["1", "2"] {
        let VisitOutcome::Opened(mut visit) = trail.visit(raw).await else {
            panic!("resource {raw} should open");
        };
        trail.go_next(&mut visit).await.expect("advance");
    }

    let mut harness = mount_view(ViewKind::Landing, trail);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Revisar Conteúdo"), "missing review cta in {html}");
    assert!(html.contains("100%"), "missing percentage in {html}");
    assert!(html.contains("Parabéns"), "missing celebration in {html}");
    assert!(!html.contains("Bloqueado"), "nothing should be locked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn not_found_view_offers_a_way_home() {
    let mut harness = setup_view_harness(ViewKind::NotFound).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Recurso não encontrado"), "missing message in {html}");
    assert!(html.contains("Voltar para a página inicial"), "missing home button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_resource_id_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::Resource("abc".to_string())).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Recurso não encontrado"), "missing message in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn locked_resource_shows_lock_and_keeps_pointer() {
    let mut harness = setup_view_harness(ViewKind::Resource("2".to_string())).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Etapa bloqueada"), "missing lock message in {html}");
    assert!(!html.contains("Quiz dos Guardiões"), "locked content rendered in {html}");
    assert_eq!(harness.trail.snapshot().current(), ResourceId::new(0));
}

#[tokio::test(flavor = "current_thread")]
async fn media_resource_renders_video_audio_and_navigation() {
    let trail = setup_trail().await;
    finish_gallery(&trail).await;

    let mut harness = mount_view(ViewKind::Resource("1".to_string()), trail);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Etapa 2 de 3"), "missing step label in {html}");
    assert!(html.contains("Vídeo Educativo"), "missing video in {html}");
    assert!(html.contains("Áudios Complementares"), "missing audio list in {html}");
    assert!(
        html.contains("Espaço reservado para o player de áudio 1"),
        "missing audio placeholder in {html}"
    );
    assert!(html.contains("Próxima Etapa"), "missing next label in {html}");
    assert!(!html.contains("Veja todas as páginas"), "media should not be gated in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn gallery_starts_gated_on_first_page() {
    let mut harness = setup_view_harness(ViewKind::Resource("0".to_string())).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Etapa 1 de 3"), "missing step label in {html}");
    assert!(html.contains("1 / 6"), "missing page counter in {html}");
    assert!(
        html.contains("Veja todas as páginas para continuar."),
        "missing gate hint in {html}"
    );
    assert!(html.contains("nav-next gated"), "next button not gated in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_resource_is_the_final_step() {
    let trail = setup_trail().await;
    finish_gallery(&trail).await;
    let VisitOutcome::Opened(mut visit) = trail.visit("1").await else {
        panic!("media should open");
    };
    trail.go_next(&mut visit).await.expect("advance past media");

    let mut harness = mount_view(ViewKind::Resource("2".to_string()), trail);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Teste Seus Conhecimentos"), "missing quiz heading in {html}");
    assert!(html.contains("Finalizar Trilha"), "missing finish label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn one_page_gallery_unlocks_next_once_shown() {
    let trail = setup_custom_trail(one_page_gallery_trail()).await;
    let mut harness = mount_view(ViewKind::Resource("0".to_string()), trail);
    harness.rebuild();
    settle(&mut harness).await;
    let html = harness.render();

    assert!(html.contains("1 / 1"), "missing page counter in {html}");
    assert!(!html.contains("nav-next gated"), "next button still gated in {html}");
    assert!(
        !html.contains("Veja todas as páginas"),
        "gate hint still shown in {html}"
    );
    assert!(harness.trail.snapshot().completed().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn multi_page_gallery_stays_gated_on_first_page() {
    let mut harness = setup_view_harness(ViewKind::Resource("0".to_string())).await;
    harness.rebuild();
    settle(&mut harness).await;
    let html = harness.render();

    assert!(html.contains("nav-next gated"), "next button not gated in {html}");
}
