//! Transform pipeline
//!
//!     Every stage of the engine is a [Runnable]: a typed step from one representation to
//!     the next. Stages compose into a [Transform] with `.then()`, and the compiler checks that
//!     each output feeds the next input:
//!
//!         Transform::from_fn(Ok)
//!             .then(LineCleaning::new())                          String -> Vec<String>
//!             .then(Structuring::new(InferenceOptions::full()))   Vec<String> -> Vec<Section>
//!             .then(EditorSerialization::new())                   Vec<Section> -> String
//!
//!     The pipelines used by the loader and the CLI are prebuilt statics, see [standard].
//!
//!     The engine stages themselves never fail. [TransformError] exists for stages that read
//!     external input (e.g. songs deserialized from JSON) and for custom stages.

pub mod stages;
pub mod standard;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("{0}")]
    Error(String),
    #[error("stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::Error(s)
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::Error(s.to_string())
    }
}

/// A single typed processing step.
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composed pipeline from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform { run_fn: Box::new(f) }
    }

    /// Feed this pipeline's output into `stage`.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Feed this pipeline's output into a prebuilt static pipeline.
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}
