mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod confirm_dialog;
pub use confirm_dialog::{use_delete_confirmation, ConfirmDialog, DeleteConfirmation};

mod loading;
pub use loading::LoadingScreen;

mod dashboard;
pub use dashboard::DashboardView;
