//////////////////////////////////////////////////
// Using

#[cfg(target_os = "android")]
use ndk::asset::AssetManager;
#[cfg(target_os = "android")]
use std::ffi::CString;
#[cfg(target_os = "android")]
use winit::platform::android::activity::AndroidApp;

//////////////////////////////////////////////////
// Definition

/// The asset source handed to `Engine::init`. On Android this wraps the
/// asset manager of the hosting app; on desktop it reads from `assets/`.
pub struct Assets {
    #[cfg(target_os = "android")]
    asset_manager: AssetManager,
}

//////////////////////////////////////////////////
// Implementations

#[cfg(target_os = "android")]
impl Assets {
    pub fn new(android_app: &AndroidApp) -> Self {
        Assets {
            asset_manager: android_app.asset_manager(),
        }
    }

    pub fn load_bytes(&self, filename: &str) -> Option<Vec<u8>> {
        let mut asset = CString::new(filename).ok().and_then(|filename| self.asset_manager.open(&filename));
        asset.as_mut().and_then(|asset| asset.buffer().ok()).map(|buffer| buffer.to_vec())
    }
}

#[cfg(not(target_os = "android"))]
impl Assets {
    pub fn new() -> Self {
        Assets {}
    }

    pub fn load_bytes(&self, filename: &str) -> Option<Vec<u8>> {
        std::fs::read(format!("assets/{}", filename)).ok()
    }
}

#[cfg(not(target_os = "android"))]
impl Default for Assets {
    fn default() -> Self {
        Self::new()
    }
}

impl Assets {
    pub fn load_string(&self, filename: &str) -> Option<String> {
        self.load_bytes(filename).and_then(|bytes| String::from_utf8(bytes).ok())
    }
}
