//! Split configuration.
//!
//! A [`ConversionPlan`] is an ordered list of [`SplitConfig`] triples. It
//! can be built from command-line flags, loaded from a YAML plan file, or
//! derived from the standard VisDrone DET directory layout.
//!
//! ```yaml
//! splits:
//!   - name: train
//!     image_dir: VisDrone2019-DET-train/images
//!     annotation_dir: VisDrone2019-DET-train/annotations
//!     output_dir: VisDrone2019-DET-train/yolo_labels
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Split names of the VisDrone2019 DET release, in conversion order.
pub const VISDRONE_SPLITS: [&str; 3] = ["train", "val", "test-dev"];

/// Output directory name created inside each VisDrone split directory.
pub const DEFAULT_OUTPUT_NAME: &str = "yolo_labels";

/// One (image_dir, annotation_dir, output_dir) triple.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitConfig {
    pub name: String,
    pub image_dir: PathBuf,
    pub annotation_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl SplitConfig {
    pub fn new(
        name: impl Into<String>,
        image_dir: impl Into<PathBuf>,
        annotation_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            image_dir: image_dir.into(),
            annotation_dir: annotation_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    fn resolve_against(&mut self, base: &Path) {
        for dir in [
            &mut self.image_dir,
            &mut self.annotation_dir,
            &mut self.output_dir,
        ] {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
    }
}

/// Splits converted in order by the CLI.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionPlan {
    pub splits: Vec<SplitConfig>,
}

impl ConversionPlan {
    /// A plan with a single split.
    pub fn single(split: SplitConfig) -> Self {
        Self {
            splits: vec![split],
        }
    }

    /// The three VisDrone2019 DET splits under `root`.
    ///
    /// Each split is expected at `root/VisDrone2019-DET-<split>/` with
    /// `images/` and `annotations/` inside; labels go to
    /// `root/VisDrone2019-DET-<split>/<output_name>/`.
    pub fn visdrone(root: &Path, output_name: &str) -> Self {
        let splits = VISDRONE_SPLITS
            .iter()
            .map(|split| {
                let split_dir = root.join(format!("VisDrone2019-DET-{split}"));
                SplitConfig::new(
                    *split,
                    split_dir.join("images"),
                    split_dir.join("annotations"),
                    split_dir.join(output_name),
                )
            })
            .collect();

        Self { splits }
    }

    /// Load a YAML plan file.
    ///
    /// Relative directories are resolved against the plan file's parent
    /// directory, so a plan can live next to the dataset it describes.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConvertError> {
        let text = fs::read_to_string(path).map_err(ConvertError::Io)?;
        let mut plan = Self::from_yaml_str(&text, path)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for split in &mut plan.splits {
            split.resolve_against(base);
        }

        Ok(plan)
    }

    /// Parse and validate a YAML plan without touching the filesystem.
    ///
    /// `origin` is only used in error messages.
    pub fn from_yaml_str(text: &str, origin: &Path) -> Result<Self, ConvertError> {
        let plan: ConversionPlan =
            serde_yaml::from_str(text).map_err(|source| ConvertError::PlanParse {
                path: origin.to_path_buf(),
                source,
            })?;
        plan.validate(origin)?;
        Ok(plan)
    }

    fn validate(&self, origin: &Path) -> Result<(), ConvertError> {
        let invalid = |message: String| ConvertError::PlanInvalid {
            path: origin.to_path_buf(),
            message,
        };

        if self.splits.is_empty() {
            return Err(invalid("plan lists no splits".to_string()));
        }

        let mut seen = BTreeSet::new();
        for (index, split) in self.splits.iter().enumerate() {
            let name = split.name.trim();
            if name.is_empty() {
                return Err(invalid(format!("split {} has an empty name", index + 1)));
            }
            if !seen.insert(name) {
                return Err(invalid(format!("split name '{name}' is used more than once")));
            }
        }

        Ok(())
    }
}
