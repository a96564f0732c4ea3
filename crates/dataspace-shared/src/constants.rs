//! Application-wide constants

/// Secondary menu drawer width while the sidebar is open.
pub const SIDEBAR_WIDTH_EXPANDED: u32 = 260;
/// Secondary menu drawer width while the sidebar is collapsed.
pub const SIDEBAR_WIDTH_COLLAPSED: u32 = 64;

pub const BANNER_HEIGHT: u32 = 64;
pub const PRIMARY_MENU_HEIGHT: u32 = 56;
/// Top edge of the drawer and content area (banner + primary bar).
pub const CONTENT_TOP_OFFSET: u32 = BANNER_HEIGHT + PRIMARY_MENU_HEIGHT;

/// Left padding of a secondary menu row, in theme spacing units.
pub const ROW_BASE_INDENT: u32 = 2;
/// Extra padding added per nesting level, in theme spacing units.
pub const ROW_INDENT_STEP: u32 = 2;

// Simulated service latency (milliseconds)
pub const LATENCY_LIST_MS: u64 = 300;
pub const LATENCY_GET_MS: u64 = 200;
pub const LATENCY_CREATE_MS: u64 = 500;
pub const LATENCY_UPDATE_MS: u64 = 500;
pub const LATENCY_DELETE_MS: u64 = 400;
pub const LATENCY_BATCH_DELETE_MS: u64 = 500;
pub const LATENCY_USER_LIST_MS: u64 = 200;
pub const LATENCY_USER_GET_MS: u64 = 100;

pub const ORGANIZATION_NAME_MAX: u64 = 50;
pub const ORGANIZATION_DESCRIPTION_MAX: u64 = 200;
pub const ROLE_NAME_MAX: u64 = 50;
pub const ROLE_SCOPE_MAX: u64 = 100;
pub const ROLE_EXPRESSION_MAX: u64 = 200;

pub const ID_SUFFIX_LEN: usize = 9;
