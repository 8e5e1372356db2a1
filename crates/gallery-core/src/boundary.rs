//! Fallible render regions.
//!
//! A region wraps a render function returning `Result` and a fallback
//! function. The first failure moves the region to [`BoundaryState::Failed`]
//! and it keeps showing the fallback until [`FallibleRegion::reset`] is
//! called. There is no automatic recovery.

use std::error::Error;

/// An error captured by a region, flattened for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedError {
    /// Top-level message.
    pub message: String,
    /// Messages of the `source()` chain, outermost first.
    pub chain: Vec<String>,
}

impl CapturedError {
    pub fn capture(err: &(dyn Error + 'static)) -> Self {
        let mut chain = Vec::new();
        let mut source = err.source();
        while let Some(s) = source {
            chain.push(s.to_string());
            source = s.source();
        }
        Self {
            message: err.to_string(),
            chain,
        }
    }

    /// Message followed by its causes, one per line.
    pub fn details(&self) -> String {
        let mut out = self.message.clone();
        for cause in &self.chain {
            out.push_str("\n  caused by: ");
            out.push_str(cause);
        }
        out
    }
}

/// Boundary state: rendering normally, or showing the fallback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BoundaryState {
    #[default]
    Ok,
    Failed(CapturedError),
}

impl BoundaryState {
    pub fn has_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn error(&self) -> Option<&CapturedError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Ok => None,
        }
    }
}

type ErrorHook = Box<dyn FnMut(&CapturedError)>;

/// A render function guarded by a fallback.
pub struct FallibleRegion<R, F> {
    render: R,
    fallback: F,
    state: BoundaryState,
    on_error: Option<ErrorHook>,
}

impl<R, F, V, E> FallibleRegion<R, F>
where
    R: FnMut() -> Result<V, E>,
    F: Fn(&CapturedError) -> V,
    E: Error + 'static,
{
    pub fn new(render: R, fallback: F) -> Self {
        Self {
            render,
            fallback,
            state: BoundaryState::Ok,
            on_error: None,
        }
    }

    /// Install a hook called once per caught failure.
    pub fn on_error(mut self, hook: impl FnMut(&CapturedError) + 'static) -> Self {
        self.on_error = Some(Box::new(hook));
        self
    }

    /// Render the region.
    ///
    /// In the failed state the render function is not called again.
    pub fn render(&mut self) -> V {
        if let BoundaryState::Failed(err) = &self.state {
            return (self.fallback)(err);
        }

        match (self.render)() {
            Ok(view) => view,
            Err(e) => {
                let captured = CapturedError::capture(&e);
                if let Some(hook) = self.on_error.as_mut() {
                    hook(&captured);
                }
                let view = (self.fallback)(&captured);
                self.state = BoundaryState::Failed(captured);
                view
            }
        }
    }

    /// Clear the failure so the next [`render`](Self::render) retries.
    pub fn reset(&mut self) {
        self.state = BoundaryState::Ok;
    }

    pub fn state(&self) -> &BoundaryState {
        &self.state
    }
}
