/// Start/success/error state of one fetched value.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub success: bool,
    pub error: Option<String>,
    /// A mutation made the cached value outdated; refetch before trusting it.
    pub stale: bool,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            success: false,
            error: None,
            stale: false,
        }
    }
}

impl<T> Resource<T> {
    pub fn start(&mut self) {
        self.loading = true;
        self.success = false;
        self.error = None;
    }

    pub fn succeed(&mut self, data: T) {
        self.data = Some(data);
        self.loading = false;
        self.success = true;
        self.stale = false;
    }

    /// Keeps the previous data so a failed reload doesn't blank the view.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.success = false;
        self.error = Some(message.into());
    }
}

/// Start/success/error state of a write with no cached payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mutation {
    pub loading: bool,
    pub success: bool,
    pub error: Option<String>,
}

impl Mutation {
    pub fn start(&mut self) {
        *self = Mutation {
            loading: true,
            ..Default::default()
        };
    }

    pub fn succeed(&mut self) {
        *self = Mutation {
            success: true,
            ..Default::default()
        };
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Mutation {
            error: Some(message.into()),
            ..Default::default()
        };
    }
}
