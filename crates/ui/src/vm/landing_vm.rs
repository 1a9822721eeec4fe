use trail_core::model::{ProgressState, ResourceAccess, ResourceId, Trail};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaKind {
    Start,
    Continue,
    Review,
}

/// Landing call-to-action: wording plus the resource the button opens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallToActionVm {
    pub kind: CtaKind,
    pub heading: &'static str,
    pub body: &'static str,
    pub button_label: &'static str,
    pub target: ResourceId,
}

impl CallToActionVm {
    fn for_progress(progress: &ProgressState) -> Self {
        if progress.is_trail_completed() {
            Self {
                kind: CtaKind::Review,
                heading: "Parabéns! Você completou a trilha!",
                body: "Você pode revisar o conteúdo ou começar novamente.",
                button_label: "Revisar Conteúdo",
                target: ResourceId::new(0),
            }
        } else if progress.current().value() > 0 {
            Self {
                kind: CtaKind::Continue,
                heading: "Continue sua jornada",
                body: "Continue de onde parou e complete sua trilha de aprendizado.",
                button_label: "Continuar Trilha",
                target: progress.current(),
            }
        } else {
            Self {
                kind: CtaKind::Start,
                heading: "Comece sua jornada",
                body: "Clique no botão abaixo para iniciar a trilha de aprendizado.",
                button_label: "Iniciar Trilha",
                target: ResourceId::new(0),
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowBadge {
    Completed,
    Current,
    Locked,
    None,
}

impl RowBadge {
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            RowBadge::Completed => Some("✓ Concluído"),
            RowBadge::Current => Some("Disponível"),
            RowBadge::Locked => Some("🔒 Bloqueado"),
            RowBadge::None => None,
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            RowBadge::Completed => "badge badge-done",
            RowBadge::Current => "badge badge-current",
            RowBadge::Locked => "badge badge-locked",
            RowBadge::None => "badge",
        }
    }
}

/// One row of the trail preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrailRowVm {
    pub id: ResourceId,
    pub position: usize,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub accent: String,
    pub badge: RowBadge,
}

impl TrailRowVm {
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.badge == RowBadge::Locked
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressPanelVm {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
    pub show_reset: bool,
    pub celebrate: bool,
}

impl ProgressPanelVm {
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Você completou {} de {} etapas", self.completed, self.total)
    }

    /// The percentage is printed inside the bar only once the bar is wide enough.
    #[must_use]
    pub fn show_bar_label(&self) -> bool {
        self.percentage > 10
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandingVm {
    pub cta: CallToActionVm,
    pub progress: ProgressPanelVm,
    pub rows: Vec<TrailRowVm>,
}

#[must_use]
pub fn map_landing(trail: &Trail, progress: &ProgressState) -> LandingVm {
    let rows = trail
        .resources()
        .iter()
        .map(|resource| {
            let id = resource.id();
            let badge = match progress.access(id) {
                Some(ResourceAccess::Completed) => RowBadge::Completed,
                Some(ResourceAccess::Locked) => RowBadge::Locked,
                _ if progress.current() == id => RowBadge::Current,
                _ => RowBadge::None,
            };
            TrailRowVm {
                id,
                position: id.value() + 1,
                title: resource.title().to_owned(),
                description: resource.description().to_owned(),
                icon: resource.icon().to_owned(),
                accent: resource.accent().to_owned(),
                badge,
            }
        })
        .collect();

    let percentage = progress.percentage();
    LandingVm {
        cta: CallToActionVm::for_progress(progress),
        progress: ProgressPanelVm {
            completed: progress.completed_count(),
            total: progress.total(),
            percentage,
            show_reset: progress.has_progress(),
            celebrate: percentage == 100,
        },
        rows,
    }
}
