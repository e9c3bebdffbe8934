#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub description: String,
}

/// Newest-first queue of fire-and-forget notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    limit: usize,
}

impl ToastQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            limit: limit.max(1),
        }
    }

    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.insert(
            0,
            Toast {
                id,
                title: title.into(),
                description: description.into(),
            },
        );
        self.toasts.truncate(self.limit);
        id
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
