//! Screen assembly.

use crate::values::{property_value, shape_kind};
use crate::{CompileError, CompileOptions, Pass, Registry, Warning};
use rayon::prelude::*;
use rhizome_yail_ir::builders;
use rhizome_yail_ir::Expr;
use rhizome_yail_metadata::Environment;
use rhizome_yail_syntax_bky::{Block, BlockDocument};
use rhizome_yail_syntax_scm::{Component, ScreenDocument};
use serde::Serialize;

/// Raw inputs for one screen.
#[derive(Debug, Clone)]
pub struct ScreenSource {
    pub name: String,
    pub scm: String,
    pub bky: String,
}

/// Generated module for one screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenOutput {
    pub form_name: String,
    pub text: String,
    pub warnings: Vec<Warning>,
}

/// Compiles screens against one environment.
///
/// The generator is immutable after construction and can be shared across
/// threads; all per-screen state lives in a [`Pass`].
#[derive(Debug)]
pub struct Generator {
    registry: Registry,
    environment: Environment,
    options: CompileOptions,
}

impl Generator {
    pub fn new(environment: Environment, options: CompileOptions) -> Self {
        Self::with_registry(environment, options, Registry::builtin())
    }

    pub fn with_registry(
        environment: Environment,
        options: CompileOptions,
        registry: Registry,
    ) -> Self {
        Self {
            registry,
            environment,
            options,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Parse and compile one screen. An empty block file means a screen with
    /// no blocks.
    pub fn compile_screen(&self, scm: &str, bky: &str) -> Result<ScreenOutput, CompileError> {
        self.options.validate()?;
        if scm.trim().is_empty() {
            return Err(CompileError::MissingInput("screen source".into()));
        }
        let screen = rhizome_yail_syntax_scm::parse(scm)?;
        let blocks = if bky.trim().is_empty() {
            BlockDocument::default()
        } else {
            rhizome_yail_syntax_bky::parse(bky)?
        };
        self.generate(&screen, &blocks)
    }

    /// Compile independent screens in parallel. Results keep input order.
    pub fn compile_screens(
        &self,
        screens: &[ScreenSource],
    ) -> Vec<(String, Result<ScreenOutput, CompileError>)> {
        screens
            .par_iter()
            .map(|source| {
                let result = self.compile_screen(&source.scm, &source.bky);
                if let Err(err) = &result {
                    tracing::warn!(screen = %source.name, %err, "screen failed to compile");
                }
                (source.name.clone(), result)
            })
            .collect()
    }

    /// Generate the module for already-parsed inputs.
    pub fn generate(
        &self,
        screen: &ScreenDocument,
        blocks: &BlockDocument,
    ) -> Result<ScreenOutput, CompileError> {
        self.options.validate()?;
        let mut pass = Pass::new(self, screen);
        let form = screen.form_name();

        let report = pass.metadata().validate_components(screen.components());
        for unsupported in report.unsupported {
            pass.warn(Warning::UnsupportedComponent {
                name: unsupported.name,
                component_type: unsupported.component_type,
            });
        }

        let mut module = vec![
            Expr::block_comment("$Source $Yail"),
            builders::form_def(&self.options.package_name, form),
            builders::require_runtime(&self.options.runtime_require),
        ];

        let globals = pass.globals(blocks)?;
        tracing::debug!(count = globals.len(), "generated globals");
        module.extend(globals);

        let procedures = pass.procedures(blocks)?;
        tracing::debug!(count = procedures.len(), "generated procedures");
        module.extend(procedures);

        module.push(Expr::line_comment(form));
        module.push(pass.form_setup(screen.form()));
        module.extend(pass.events_for(blocks, form)?);

        for component in screen.components().into_iter().skip(1) {
            module.push(Expr::line_comment(component.name.as_str()));
            module.push(pass.add_component(component));
            module.extend(pass.events_for(blocks, &component.name)?);
        }

        module.push(builders::init_runtime());

        let mut text = module
            .iter()
            .map(Expr::to_text)
            .collect::<Vec<_>>()
            .join("\n\n");
        text.push('\n');

        let warnings = pass.take_warnings();
        tracing::info!(
            form,
            blocks = blocks.top_level().len(),
            warnings = warnings.len(),
            "compiled screen"
        );
        Ok(ScreenOutput {
            form_name: form.to_string(),
            text,
            warnings,
        })
    }
}

/// Section builders.
impl Pass<'_> {
    fn globals(&mut self, blocks: &BlockDocument) -> Result<Vec<Expr>, CompileError> {
        let mut defs = Vec::new();
        for block in blocks.global_declarations() {
            let (Some(name), Some(value)) = (block.field("NAME"), block.value("VALUE")) else {
                tracing::debug!(id = ?block.id, "skipping incomplete global declaration");
                continue;
            };
            self.track_variable(builders::global_name(name), Some(value));
            let value = self.expr(value)?;
            defs.push(builders::global_def(name, value));
        }
        Ok(defs)
    }

    fn procedures(&mut self, blocks: &BlockDocument) -> Result<Vec<Expr>, CompileError> {
        blocks
            .procedure_definitions()
            .into_iter()
            .map(|block| self.expr(block))
            .collect()
    }

    fn property_sets(&self, component: &Component) -> Vec<Expr> {
        component
            .properties
            .iter()
            .map(|(key, value)| {
                let kind = self
                    .property_kind(Some(component.component_type.as_str()), key)
                    .unwrap_or_else(|| shape_kind(value));
                builders::set_property(&component.name, key, property_value(value, kind), kind)
            })
            .collect()
    }

    fn form_setup(&self, form: &Component) -> Expr {
        let props = self.property_sets(form);
        builders::form_setup(props)
    }

    fn add_component(&self, component: &Component) -> Expr {
        let props = self.property_sets(component);
        let qualified = builders::qualify_type(
            &self.generator().options().runtime_namespace,
            &component.component_type,
        );
        let parent = component.parent.as_deref().unwrap_or(self.form_name());
        builders::add_component(parent, &qualified, &component.name, props)
    }

    fn events_for(
        &mut self,
        blocks: &BlockDocument,
        component: &str,
    ) -> Result<Vec<Expr>, CompileError> {
        let mut events = Vec::new();
        for block in blocks.event_handlers() {
            if self.component_instance(block) == component {
                events.push(self.event(block)?);
            }
        }
        Ok(events)
    }

    fn event(&mut self, block: &Block) -> Result<Expr, CompileError> {
        let component = self.component_instance(block);
        let event = event_name(block);
        let component_type = self
            .component_type(block, &component)
            .unwrap_or_else(|| "Form".to_string());

        let params = match self.metadata().event(&component_type, event) {
            Some(signature) => {
                for param in &signature.params {
                    if let Some(kind) = param.kind {
                        self.record_variable(builders::local_name(&param.name), kind);
                    }
                }
                signature.param_names()
            }
            None => {
                self.warn(Warning::MissingMetadata {
                    component_type: component_type.clone(),
                    member: event.to_string(),
                });
                Vec::new()
            }
        };

        let body = self.statements(block, "DO")?;
        Ok(builders::event_def(&component, event, &params, body))
    }
}

/// Event name from the block's mutation, fields or type tag.
fn event_name(block: &Block) -> &str {
    if let Some(name) = block
        .mutation_attr("event_name")
        .or_else(|| block.field("EVENT_NAME"))
    {
        return name;
    }
    if let Some((_, name)) = block.block_type.split_once("_when_")
        && !name.is_empty()
    {
        return name;
    }
    if block.block_type == "component_event"
        && let Some(name) = block.field("METHOD_NAME")
    {
        return name;
    }
    "Initialize"
}
