use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::{FileManager, FileType};
use crate::script_processor::EpisodeCollection;

// @module: Application controller for script splitting

/// Outcome of processing one script in folder mode
enum FileOutcome {
    Done,
    Skipped,
    Failed,
}

/// Main application controller for script splitting
#[derive(Clone)]
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    #[allow(dead_code)]
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    #[allow(dead_code)]
    pub fn is_initialized(&self) -> bool {
        self.config.validate().is_ok()
    }

    /// Run the main workflow with an input script file and output directory
    pub async fn run(
        &self,
        input_file: PathBuf,
        output_dir: PathBuf,
        force_overwrite: bool,
    ) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        // Check if the input file exists
        if !FileManager::file_exists(&input_file) {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        // Ensure the output directory exists
        FileManager::ensure_dir(&output_dir)?;

        // Check if a manifest already exists
        let output_path = FileManager::generate_output_path(
            &input_file,
            &output_dir,
            &self.config.output_extension,
        );
        if output_path.exists() && !force_overwrite {
            // Skip if the manifest already exists and no force flag
            warn!("Skipping file, split output already exists (use -f to force overwrite)");
            return Ok(());
        }

        // Detect file type
        let file_type = FileManager::detect_file_type(&input_file)?;
        if file_type != FileType::Script {
            return Err(anyhow::anyhow!(
                "Input does not look like a script file: {:?}",
                input_file
            ));
        }

        // Read and split the script
        let content = FileManager::read_to_string(&input_file)?;
        let collection = EpisodeCollection {
            source_file: input_file.clone(),
            episodes: EpisodeCollection::split_script(&content),
        };

        // The core falls back to a single whole-document episode when no
        // heading matched; surface that to the user
        let normalized = crate::script_processor::normalize_line_endings(&content);
        if crate::script_processor::scan_headings(&normalized).is_empty() {
            warn!(
                "No episode headings found in {:?}, exporting the whole script as 第1集",
                input_file
            );
        }

        // Write the manifest
        collection
            .write_to_json(&output_path, self.config.pretty_output)
            .context("Failed to write episode manifest")?;

        // Optionally write one text file per episode
        if self.config.write_episode_files {
            for episode in &collection.episodes {
                let stem = input_file
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| "script".to_string());
                let episode_path =
                    output_dir.join(format!("{}.{}.txt", stem, episode.id()));
                FileManager::write_to_file(&episode_path, &episode.content)?;
                debug!("Wrote episode file {:?}", episode_path);
            }
        }

        let duration = start_time.elapsed();
        let file_name = input_file
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        info!(
            "Split {} into {} episode(s) in {} -> {:?}",
            file_name,
            collection.episodes.len(),
            Self::format_duration(duration),
            output_path
        );

        Ok(())
    }

    /// Run the splitter over every script found in a folder
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        // Check if the input directory exists
        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow::anyhow!(
                "Input directory does not exist: {:?}",
                input_dir
            ));
        }

        // Find all script files in the directory (recursive)
        let script_files = FileManager::find_files(&input_dir, "txt")?;

        // If no script files found, return error
        if script_files.is_empty() {
            return Err(anyhow::anyhow!(
                "No script files found in directory: {:?}",
                input_dir
            ));
        }

        // Create multi-progress instance for multiple file processing
        let multi_progress = MultiProgress::new();

        // Create a progress bar for folder processing
        let folder_pb = multi_progress.add(ProgressBar::new(script_files.len() as u64));
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result);
        folder_pb.set_message("Processing scripts");

        // Process a bounded number of scripts concurrently
        let outcomes: Vec<FileOutcome> = stream::iter(script_files)
            .map(|script_file| {
                let folder_pb = folder_pb.clone();
                let fallback_dir = input_dir.clone();
                async move {
                    let file_name = script_file
                        .file_name()
                        .map(|f| f.to_string_lossy().to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    folder_pb.set_message(format!("Processing: {}", file_name));

                    // Output goes next to the source script
                    let output_dir = script_file
                        .parent()
                        .map(Path::to_path_buf)
                        .unwrap_or(fallback_dir);

                    // Check if the manifest already exists
                    let output_path = FileManager::generate_output_path(
                        &script_file,
                        &output_dir,
                        &self.config.output_extension,
                    );
                    let outcome = if output_path.exists() && !force_overwrite {
                        warn!(
                            "Skipping {}, split output already exists (use -f to force overwrite)",
                            file_name
                        );
                        FileOutcome::Skipped
                    } else {
                        match self.run(script_file.clone(), output_dir, force_overwrite).await {
                            Ok(_) => FileOutcome::Done,
                            Err(e) => {
                                error!("Error processing file {}: {}", file_name, e);
                                FileOutcome::Failed
                            }
                        }
                    };

                    folder_pb.inc(1);
                    outcome
                }
            })
            .buffer_unordered(self.config.concurrent_files.max(1))
            .collect()
            .await;

        // Finish the folder progress bar
        folder_pb.finish_with_message("Folder processing complete");

        // Track success and failure counts
        let success_count = outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Done))
            .count();
        let skip_count = outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Skipped))
            .count();
        let error_count = outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Failed))
            .count();

        // Give summary results - important for batch operations
        let duration = start_time.elapsed();
        info!(
            "Folder processing completed in {}: {} processed, {} skipped, {} errors",
            Self::format_duration(duration),
            success_count,
            skip_count,
            error_count
        );

        Ok(())
    }

    /// Format a duration as a human readable string
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
