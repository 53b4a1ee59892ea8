use bevy::prelude::*;

/// Receives the URL of a clicked hotspot.
pub trait NavigationSink {
    fn navigate(&mut self, url: &str);
}

/// Navigates the hosting page on wasm; logs the destination on native builds.
#[derive(Default)]
pub struct BrowserNavigator;

impl NavigationSink for BrowserNavigator {
    fn navigate(&mut self, url: &str) {
        info!("Navigating to {}", url);

        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                error!("Window object not available");
                return;
            };
            if let Err(e) = window.location().set_href(url) {
                error!("Failed to navigate to {}: {:?}", url, e);
            }
        }
    }
}

/// Collects requested URLs instead of leaving the page.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

#[cfg(test)]
impl NavigationSink for RecordingNavigator {
    fn navigate(&mut self, url: &str) {
        self.visited.push(url.to_string());
    }
}
