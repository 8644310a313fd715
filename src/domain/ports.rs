use crate::domain::model::{Catalog, ClockReading, DisplayState, Frame};
use crate::utils::error::Result;

pub trait ClockSource: Send + Sync {
    fn now(&self) -> ClockReading;
}

pub trait Renderer: Send + Sync {
    fn render(&self, catalog: &Catalog, frame: &Frame, display: &DisplayState) -> Result<String>;
}

impl<C: ClockSource + ?Sized> ClockSource for Box<C> {
    fn now(&self) -> ClockReading {
        (**self).now()
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&self, catalog: &Catalog, frame: &Frame, display: &DisplayState) -> Result<String> {
        (**self).render(catalog, frame, display)
    }
}
