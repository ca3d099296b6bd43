use clap::{Args, Subcommand};
use serde_json::json;
use tpu_core::{require_option, CoreError, FitmentSelection, FitmentSelectionPatch, SelectionField};
use tpu_fitment::{FitmentStore, SelectionStorage};

/// One flag per selection field. An empty value clears that field.
#[derive(Debug, Default, Args)]
pub(crate) struct SelectionArgs {
    /// Capacity id, e.g. `7000`
    #[arg(long)]
    pub capacity: Option<String>,

    /// Axle configuration id: `single`, `tandem`, or `triple`
    #[arg(long)]
    pub axle: Option<String>,

    /// Bolt pattern id, e.g. `6-5.5`
    #[arg(long)]
    pub bolt_pattern: Option<String>,

    /// Brake type id: `electric`, `hydraulic`, or `idler`
    #[arg(long)]
    pub brake: Option<String>,
}

impl SelectionArgs {
    fn field_values(&self) -> [(SelectionField, Option<&str>); 4] {
        [
            (SelectionField::Capacity, self.capacity.as_deref()),
            (SelectionField::AxleConfig, self.axle.as_deref()),
            (SelectionField::BoltPattern, self.bolt_pattern.as_deref()),
            (SelectionField::BrakeType, self.brake.as_deref()),
        ]
    }

    /// Rejects ids that are not in the field's catalog. Empty values pass.
    pub(crate) fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in self.field_values() {
            if let Some(id) = value.filter(|v| !v.is_empty()) {
                require_option(field.name(), field.catalog(), id)?;
            }
        }
        Ok(())
    }

    pub(crate) fn apply_to(&self, selection: &mut FitmentSelection) {
        for (field, value) in self.field_values() {
            if let Some(id) = value {
                selection.set(field, id);
            }
        }
    }

    pub(crate) fn to_patch(&self) -> FitmentSelectionPatch {
        self.field_values()
            .into_iter()
            .fold(FitmentSelectionPatch::default(), |patch, (field, value)| {
                match value {
                    Some(id) => patch.with(field, id),
                    None => patch,
                }
            })
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum SelectionCommands {
    /// Print the saved selection
    Show,
    /// Merge the given fields into the saved selection
    Save {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Remove every saved field
    Clear,
}

pub(crate) fn run<S: SelectionStorage>(
    command: SelectionCommands,
    store: &FitmentStore<S>,
) -> anyhow::Result<serde_json::Value> {
    if !store.is_available() {
        tracing::warn!("TPU_STORAGE_PATH not set; selection is not persisted");
    }

    match command {
        SelectionCommands::Show => {}
        SelectionCommands::Save { selection } => {
            selection.validate()?;
            store.save_fitment(&selection.to_patch())?;
        }
        SelectionCommands::Clear => store.clear_saved_fitment()?,
    }

    let saved = store.saved_fitment()?;
    Ok(json!({
        "persisted": store.is_available(),
        "empty": saved.is_empty(),
        "selection": saved,
    }))
}
