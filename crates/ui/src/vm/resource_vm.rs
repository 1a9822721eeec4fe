use trail_core::model::{Resource, ResourceId, Trail};

/// Header, hero and navigation labels for a resource page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePageVm {
    pub id: ResourceId,
    pub title: String,
    pub full_description: String,
    pub icon: String,
    pub accent: String,
    pub step_label: String,
    pub is_first: bool,
    pub is_last: bool,
    pub next_label: &'static str,
}

#[must_use]
pub fn map_resource_page(trail: &Trail, resource: &Resource) -> ResourcePageVm {
    let id = resource.id();
    let is_last = trail.is_last(id);
    ResourcePageVm {
        id,
        title: resource.title().to_owned(),
        full_description: resource.full_description().to_owned(),
        icon: resource.icon().to_owned(),
        accent: resource.accent().to_owned(),
        step_label: format!("Etapa {} de {}", id.value() + 1, trail.len()),
        is_first: id.value() == 0,
        is_last,
        next_label: if is_last {
            "Finalizar Trilha"
        } else {
            "Próxima Etapa"
        },
    }
}
