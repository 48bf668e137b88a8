use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use cobalt_blocks::BlockRegistry;

/// Startup-scoped owner of the registry.
///
/// Canonical families are populated on construction; extension files may be
/// applied until [`StartupContext::freeze`], after which the registry is only
/// reachable through a shared `Arc` and cannot change.
pub struct StartupContext {
    registry: BlockRegistry,
    registered: usize,
}

impl StartupContext {
    pub fn new() -> Self {
        Self {
            registry: BlockRegistry::with_defaults(),
            registered: 0,
        }
    }

    /// Applies each extension file in order. Stops at the first failing file.
    pub fn load_extensions<P: AsRef<Path>>(
        &mut self,
        paths: &[P],
    ) -> Result<usize, Box<dyn Error>> {
        let mut total = 0;
        for path in paths {
            let path = path.as_ref();
            let n = self
                .registry
                .load_extensions_from_path(path)
                .map_err(|e| format!("extension {}: {e}", path.display()))?;
            log::info!(target: "startup", "{}: {} extension variant(s)", path.display(), n);
            total += n;
        }
        self.registered += total;
        Ok(total)
    }

    /// Ends the pre-serve phase.
    pub fn freeze(self) -> Arc<BlockRegistry> {
        log::info!(
            target: "startup",
            "registry frozen: {} families, {} variants ({} custom)",
            self.registry.family_count(),
            self.registry.len(),
            self.registered
        );
        Arc::new(self.registry)
    }
}

impl Default for StartupContext {
    fn default() -> Self {
        Self::new()
    }
}
