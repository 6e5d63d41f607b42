/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Length of the selection panel's fade-out, in milliseconds.
    /// Must match the transition duration in `style.css`.
    pub const DESELECT_DELAY_MS: u32 = 300;

    /// Inventory API host
    pub const API_BASE_URL: &'static str = "https://app.wewantwaste.co.uk";

    pub const DEFAULT_POSTCODE: &'static str = "NR32";
    pub const DEFAULT_AREA: &'static str = "Lowestoft";

    /// Shown when the API rejects a request without saying why
    pub const FETCH_FALLBACK_MESSAGE: &'static str = "Failed to fetch skips";

    /// Public bucket holding one photo per skip size
    pub const SKIP_IMAGE_BASE_URL: &'static str =
        "https://yozbrydxdlcxghkphhtq.supabase.co/storage/v1/object/public/skips/skip-sizes";
}
