use crate::ports::{InterfaceAddressSource, QueryContext};
use crate::use_cases::{BuildViewTableUseCase, RewriteResponseUseCase};
use split_horizon_domain::{
    Config, DomainError, ExtState, ModuleEvent, ModuleId, ModuleState, RewriteOutcome, ViewTable,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Resolver module that rewrites external A answers to internal addresses.
///
/// The view table is built once in [`SplitHorizonModule::init`] and only
/// read afterwards, so `operate` can run for many queries at once.
pub struct SplitHorizonModule {
    id: ModuleId,
    rewriter: RewriteResponseUseCase,
}

impl SplitHorizonModule {
    #[instrument(skip(config, address_source))]
    pub async fn init(
        id: ModuleId,
        config: &Config,
        address_source: Arc<dyn InterfaceAddressSource>,
    ) -> Result<Self, DomainError> {
        let views = BuildViewTableUseCase::new(address_source)
            .execute(config)
            .await?;

        info!(module = %id, entries = views.len(), "Split horizon module initialized");
        Ok(Self::with_view_table(id, Arc::new(views), config.answer_ttl))
    }

    pub fn with_view_table(id: ModuleId, views: Arc<ViewTable>, answer_ttl: u32) -> Self {
        Self {
            id,
            rewriter: RewriteResponseUseCase::new(views, answer_ttl),
        }
    }

    pub fn id(&self) -> ModuleId {
        self.id
    }

    pub fn views(&self) -> &Arc<ViewTable> {
        self.rewriter.views()
    }

    pub fn deinit(&self, id: ModuleId) -> bool {
        if !self.owns(id) {
            return false;
        }
        debug!(module = %id, "Split horizon module deinitialized");
        true
    }

    pub fn inform_super(&self, _id: ModuleId) -> bool {
        true
    }

    /// Advances the module for one query event and reports the resulting
    /// state, both as return value and through the context's ext state.
    ///
    /// New and pass events may repeat before the single moddone event, which
    /// runs the rewrite in place. An id other than the one given at init is
    /// an error.
    pub fn operate(
        &self,
        id: ModuleId,
        event: ModuleEvent,
        ctx: &mut dyn QueryContext,
    ) -> ModuleState {
        if !self.owns(id) {
            ctx.set_ext_state(id, ExtState::Error);
            return ModuleState::Errored;
        }

        match event {
            ModuleEvent::New | ModuleEvent::Pass => {
                ctx.set_ext_state(id, ExtState::WaitModule);
                ModuleState::AwaitingResolution
            }
            ModuleEvent::ModDone => {
                debug!(module = %id, qname = %ctx.qname(), "Resolution complete");

                match self.rewriter.execute(ctx) {
                    RewriteOutcome::PassThrough | RewriteOutcome::Rewritten(_) => {
                        ctx.set_ext_state(id, ExtState::Finished);
                        ModuleState::Finished
                    }
                    RewriteOutcome::SynthesisFailed => {
                        ctx.set_ext_state(id, ExtState::Error);
                        ModuleState::Errored
                    }
                }
            }
            other => {
                let err = DomainError::UnrecognizedEvent(other.to_string());
                error!(module = %id, error = %err, "Bad event");
                ctx.set_ext_state(id, ExtState::Error);
                ModuleState::Errored
            }
        }
    }

    fn owns(&self, id: ModuleId) -> bool {
        if id != self.id {
            error!(module = %self.id, called_as = %id, "Module id mismatch");
            return false;
        }
        true
    }
}
