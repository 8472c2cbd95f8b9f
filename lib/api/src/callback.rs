//! Notifications an embedding compiler delivers while it processes sources.
//!
//! The layer only defines the interface. It never calls it, never orders the
//! notifications and never synchronizes them: that is up to the compiler
//! driving it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Callbacks that are triggered at various points while a compiler runs.
///
/// Every method defaults to a no-op so implementors override only the
/// notifications they care about. None of them can fail.
pub trait CompilerCallback: Send + Sync {
    /// An output artifact was written for `source`. `name` is the qualified
    /// name of the generated entity.
    fn on_class_generated(&self, _source: &Path, _generated: &Path, _name: &str) {}

    /// `source` has been fully compiled.
    fn on_source_compiled(&self, _source: &Path) {}

    /// Work on `source_path` started in compilation phase `phase`.
    fn start_unit(&self, _phase: &str, _source_path: &str) {}

    /// Progress report: `current` out of `total` work units are done.
    fn advance(&self, _current: u32, _total: u32) {}
}

macro_rules! forward_callback {
    ( $( $ptr:ty ),* ) => {
        $(
            impl<C> CompilerCallback for $ptr
            where
                C: CompilerCallback + ?Sized,
            {
                fn on_class_generated(&self, source: &Path, generated: &Path, name: &str) {
                    (**self).on_class_generated(source, generated, name)
                }

                fn on_source_compiled(&self, source: &Path) {
                    (**self).on_source_compiled(source)
                }

                fn start_unit(&self, phase: &str, source_path: &str) {
                    (**self).start_unit(phase, source_path)
                }

                fn advance(&self, current: u32, total: u32) {
                    (**self).advance(current, total)
                }
            }
        )*
    };
}

forward_callback!(&C, Box<C>, Arc<C>);

/// A callback ignoring every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCallback;

impl CompilerCallback for NoopCallback {}

/// A callback reporting every notification as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingCallback;

impl CompilerCallback for TracingCallback {
    fn on_class_generated(&self, source: &Path, generated: &Path, name: &str) {
        tracing::debug!(
            source = %source.display(),
            generated = %generated.display(),
            name,
            "class generated"
        );
    }

    fn on_source_compiled(&self, source: &Path) {
        tracing::debug!(source = %source.display(), "source compiled");
    }

    fn start_unit(&self, phase: &str, source_path: &str) {
        tracing::trace!(phase, source_path, "unit started");
    }

    fn advance(&self, current: u32, total: u32) {
        tracing::trace!(current, total, "progress");
    }
}

type ClassGeneratedFn = dyn Fn(&Path, &Path, &str) + Send + Sync;
type SourceCompiledFn = dyn Fn(&Path) + Send + Sync;
type StartUnitFn = dyn Fn(&str, &str) + Send + Sync;
type AdvanceFn = dyn Fn(u32, u32) + Send + Sync;

/// A callback assembled from closures, one per notification.
///
/// Notifications without a closure are ignored.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
/// use fnbridge::{CompilerCallback, FnCallback};
///
/// let done = Arc::new(AtomicU32::new(0));
/// let callback = FnCallback::new().with_advance({
///     let done = done.clone();
///     move |current, _total| done.store(current, Ordering::SeqCst)
/// });
///
/// callback.start_unit("parse", "Main.src");
/// callback.advance(3, 4);
/// assert_eq!(done.load(Ordering::SeqCst), 3);
/// ```
#[derive(Default)]
pub struct FnCallback {
    on_class_generated: Option<Box<ClassGeneratedFn>>,
    on_source_compiled: Option<Box<SourceCompiledFn>>,
    start_unit: Option<Box<StartUnitFn>>,
    advance: Option<Box<AdvanceFn>>,
}

impl FnCallback {
    /// Creates a callback ignoring every notification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the closure receiving `on_class_generated`.
    pub fn with_on_class_generated<F>(mut self, f: F) -> Self
    where
        F: Fn(&Path, &Path, &str) + Send + Sync + 'static,
    {
        self.on_class_generated = Some(Box::new(f));
        self
    }

    /// Sets the closure receiving `on_source_compiled`.
    pub fn with_on_source_compiled<F>(mut self, f: F) -> Self
    where
        F: Fn(&Path) + Send + Sync + 'static,
    {
        self.on_source_compiled = Some(Box::new(f));
        self
    }

    /// Sets the closure receiving `start_unit`.
    pub fn with_start_unit<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str) + Send + Sync + 'static,
    {
        self.start_unit = Some(Box::new(f));
        self
    }

    /// Sets the closure receiving `advance`.
    pub fn with_advance<F>(mut self, f: F) -> Self
    where
        F: Fn(u32, u32) + Send + Sync + 'static,
    {
        self.advance = Some(Box::new(f));
        self
    }
}

impl CompilerCallback for FnCallback {
    fn on_class_generated(&self, source: &Path, generated: &Path, name: &str) {
        if let Some(f) = &self.on_class_generated {
            f(source, generated, name);
        }
    }

    fn on_source_compiled(&self, source: &Path) {
        if let Some(f) = &self.on_source_compiled {
            f(source);
        }
    }

    fn start_unit(&self, phase: &str, source_path: &str) {
        if let Some(f) = &self.start_unit {
            f(phase, source_path);
        }
    }

    fn advance(&self, current: u32, total: u32) {
        if let Some(f) = &self.advance {
            f(current, total);
        }
    }
}

impl fmt::Debug for FnCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCallback")
            .field("on_class_generated", &self.on_class_generated.is_some())
            .field("on_source_compiled", &self.on_source_compiled.is_some())
            .field("start_unit", &self.start_unit.is_some())
            .field("advance", &self.advance.is_some())
            .finish()
    }
}
