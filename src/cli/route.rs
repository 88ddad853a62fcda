//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use super::help::command_name;
use super::parse::Commands;
use super::presentation::{
    format_cities, format_frame_report, format_locate_report, format_partition, format_rooms,
    format_theaters, FrameReport, LocateReport,
};
use crate::catalog::{Catalog, City, CityRegion, Theater, TheaterKind};
use crate::config::{ConfigLoader, TravelConfig};
use crate::error::ApiError;
use crate::geo::{
    frame_and_region, resolve_focus, DeniedLocation, FixedLocation, GeoPoint, LocationProvider,
    MapRegion, UndeterminedLocation,
};
use crate::query::{apply_with, partition_by_category, FilterPredicate, Query, SortOrder};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution: loaded config and catalog.
pub struct RunContext {
    config: TravelConfig,
    catalog: Catalog,
    color: bool,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        let catalog = Self::load_catalog(&config, &workspace_root)?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Build a context around an already loaded config and catalog.
    pub fn with_catalog(config: TravelConfig, catalog: Catalog) -> Self {
        let color = config.logging.color && std::io::stdout().is_terminal();
        Self {
            config,
            catalog,
            color,
        }
    }

    fn load_catalog(config: &TravelConfig, workspace_root: &Path) -> Result<Catalog, ApiError> {
        match config.catalog_path(workspace_root) {
            Some(path) => Ok(Catalog::load(&path)?),
            None => {
                info!("No catalog configured, using the built-in sample");
                Ok(Catalog::sample())
            }
        }
    }

    pub fn config(&self) -> &TravelConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        info!(command = command_name(command), "Executing command");
        match command {
            Commands::Cities {
                search,
                region,
                format,
            } => {
                let cities = self.select_cities(*region, search.as_deref());
                format_cities(&cities, *format, self.color)
            }
            Commands::Theaters {
                kind,
                search,
                format,
            } => {
                let theaters =
                    self.select_theaters(*kind, search.as_deref(), Some(SortOrder::Name));
                format_theaters(&theaters, *format, self.color)
            }
            Commands::Rooms {
                search,
                limit,
                format,
            } => {
                let mut builder = Query::builder()
                    .by_name(search.clone().unwrap_or_default())
                    .recent()
                    .folding(self.config.query.folding);
                if let Some(n) = limit.or(self.config.query.default_limit) {
                    builder = builder.limit(n);
                }
                let rooms = builder.build().run(&self.catalog.chat_rooms);
                format_rooms(&rooms, *format, self.color)
            }
            Commands::Frame {
                kind,
                points,
                format,
            } => {
                let report = self.frame(*kind, points);
                format_frame_report(&report, *format, self.color)
            }
            Commands::Locate { at, denied, format } => {
                let provider: Box<dyn LocationProvider> = if *denied {
                    Box::new(DeniedLocation)
                } else if let Some(point) = at {
                    Box::new(FixedLocation(*point))
                } else {
                    Box::new(UndeterminedLocation)
                };
                let report = self.locate(provider.as_ref());
                format_locate_report(&report, *format, self.color)
            }
            Commands::Partition { format } => {
                let buckets = partition_by_category(&self.catalog.theaters);
                format_partition(&buckets, *format, self.color)
            }
        }
    }

    /// Cities in the region segment, then matching the search text. Catalog order is kept.
    pub fn select_cities(&self, region: Option<CityRegion>, search: Option<&str>) -> Vec<City> {
        let folding = self.config.query.folding;
        let by_region = Query::builder()
            .predicate(region.map_or(FilterPredicate::All, FilterPredicate::ByCategory))
            .folding(folding)
            .build();
        let by_name = Query::builder()
            .by_name(search.unwrap_or_default())
            .folding(folding)
            .build();
        by_name.run(&by_region.run(&self.catalog.cities))
    }

    /// Theaters matching the chain filter and then the name search.
    pub fn select_theaters(
        &self,
        kind: Option<TheaterKind>,
        search: Option<&str>,
        order: Option<SortOrder>,
    ) -> Vec<Theater> {
        let folding = self.config.query.folding;
        let by_kind = match kind {
            Some(kind) => FilterPredicate::ByCategory(kind),
            None => FilterPredicate::All,
        };
        let by_name = FilterPredicate::search(search.unwrap_or_default());

        let theaters = apply_with(&self.catalog.theaters, &by_kind, None, folding);
        apply_with(&theaters, &by_name, order, folding)
    }

    /// Frame explicit points, or the selected theaters when none are given.
    pub fn frame(&self, kind: Option<TheaterKind>, points: &[GeoPoint]) -> FrameReport {
        let points: Vec<GeoPoint> = if points.is_empty() {
            self.select_theaters(kind, None, None)
                .iter()
                .map(Theater::point)
                .collect()
        } else {
            points.to_vec()
        };

        let policy = self.config.map.viewport_policy();
        let (frame, region) = frame_and_region(&points, self.config.map.fallback, &policy);
        FrameReport {
            points: points.len(),
            frame,
            region,
            fallback_used: frame.is_none(),
        }
    }

    /// Where the current-location button should move the map.
    pub fn locate(&self, provider: &dyn LocationProvider) -> LocateReport {
        let focus = resolve_focus(provider, self.config.map.fallback);
        LocateReport {
            focus,
            region: MapRegion::focused(focus.point(), self.config.map.focus_span_meters),
        }
    }
}
