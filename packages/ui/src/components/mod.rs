//! Shared widgets used by every page.

mod alert_host;
pub use alert_host::AlertHost;

mod badges;
pub use badges::{Badge, FineStatusBadge, LoanStatusBadge, RoleBadge, StandingBadge, StockBadge};

mod controls;
pub use controls::{Button, ButtonVariant, Field, Input, Label, Select, Textarea};

mod cover;
pub use cover::BookCover;

mod feedback;
pub use feedback::{EmptyRow, EmptyState, ErrorBanner, Loading, PageHeader, ResultCount, SearchBox};

mod modal;
pub use modal::{ConfirmDialog, Modal, ModalOverlay, PromptDialog};

mod sidebar;
pub use sidebar::ConsoleSidebar;
