//! Sheet processors and the ordered registry that drives the output workbook

mod detail;
mod placeholder;

pub use detail::DetailSheet;
pub use placeholder::PlaceholderSheet;

use crate::config::ReportConfig;
use crate::error::CarteraResult;
use crate::types::Grid;

/// Turns one input grid into the grid written to a named output sheet
pub trait SheetProcessor {
    fn sheet_name(&self) -> &str;

    fn process(&self, grid: Grid) -> Grid;
}

/// Ordered association of sheet names to processors
pub struct SheetRegistry {
    processors: Vec<Box<dyn SheetProcessor>>,
}

impl SheetRegistry {
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    /// Detail sheet first, then every auxiliary sheet in configured order
    pub fn standard(config: &ReportConfig) -> CarteraResult<Self> {
        let mut registry = Self::new();
        registry.register(Box::new(DetailSheet::new(config)?));
        for name in &config.auxiliary_sheets {
            registry.register(Box::new(PlaceholderSheet::new(name.clone())));
        }
        Ok(registry)
    }

    /// Append a processor; a later registration for the same sheet name replaces the earlier one in place
    pub fn register(&mut self, processor: Box<dyn SheetProcessor>) {
        match self
            .processors
            .iter()
            .position(|p| p.sheet_name() == processor.sheet_name())
        {
            Some(idx) => self.processors[idx] = processor,
            None => self.processors.push(processor),
        }
    }

    pub fn get(&self, sheet_name: &str) -> Option<&dyn SheetProcessor> {
        self.processors
            .iter()
            .find(|p| p.sheet_name() == sheet_name)
            .map(|p| p.as_ref())
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.processors.iter().map(|p| p.sheet_name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn SheetProcessor> {
        self.processors.iter().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl Default for SheetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_order() {
        let registry = SheetRegistry::standard(&ReportConfig::default()).unwrap();
        assert_eq!(
            registry.sheet_names(),
            vec![
                "Cartera_CxC_Det_Comple",
                "Cartera_CxC_Res_Comp",
                "Cartera_CxC_DSE",
                "Cartera_CxC_RSE",
                "Especiales",
                "Juridico",
                "Proyeccion",
                "Recuperacion",
                "Abonos",
            ]
        );
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut registry = SheetRegistry::new();
        registry.register(Box::new(PlaceholderSheet::new("Uno")));
        registry.register(Box::new(PlaceholderSheet::new("Dos")));
        registry.register(Box::new(PlaceholderSheet::new("Uno")));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.sheet_names(), vec!["Uno", "Dos"]);
    }

    #[test]
    fn test_get_by_name() {
        let registry = SheetRegistry::standard(&ReportConfig::default()).unwrap();
        assert!(registry.get("Juridico").is_some());
        assert!(registry.get("juridico").is_none());
        assert!(registry.get("Inexistente").is_none());
    }
}
