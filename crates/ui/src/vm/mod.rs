mod gallery_vm;
mod landing_vm;
mod resource_vm;

pub use gallery_vm::PageCursor;
pub use landing_vm::{
    CallToActionVm, CtaKind, LandingVm, ProgressPanelVm, RowBadge, TrailRowVm, map_landing,
};
pub use resource_vm::{ResourcePageVm, map_resource_page};
