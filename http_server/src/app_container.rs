use representatives::contracts::lookup::RepresentativesFinder;

pub struct Application {
    pub representatives: RepresentativesFinder,
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

impl Application {
    pub fn new() -> Self {
        Application {
            representatives: RepresentativesFinder::new(),
        }
    }
}
