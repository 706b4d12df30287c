use crate::command::Command;
use crate::context::EditorContext;
use crate::error::Result;
use crate::page::{PageId, PagesContainer};
use async_trait::async_trait;

/// Move one page in front of another page, or to the end
#[derive(Debug)]
pub struct MovePage {
    element: PageId,
    destination: Option<PageId>,
    original_index: Option<usize>,
    scroll: bool,
    scroll_delta: f64,
    executed: bool,
}

impl MovePage {
    pub fn new(
        pages: &PagesContainer,
        element: PageId,
        destination: Option<PageId>,
        scroll: bool,
    ) -> Self {
        Self {
            element,
            destination,
            original_index: pages.index_of(element),
            scroll,
            scroll_delta: 0.0,
            executed: false,
        }
    }
}

#[async_trait(?Send)]
impl Command for MovePage {
    fn description(&self) -> String {
        match self.destination {
            Some(destination) => format!("move page {} before {}", self.element, destination),
            None => format!("move page {} to the end", self.element),
        }
    }

    async fn execute(&mut self, ctx: &mut EditorContext) -> Result<()> {
        // Inside a sequence earlier moves may run between construction and here
        if !self.executed {
            self.original_index = ctx.pages.index_of(self.element);
            self.executed = true;
        }
        if self.destination == Some(self.element) {
            return Ok(());
        }

        if let Some(page) = ctx.pages.get_mut(self.element) {
            page.remove_badge();
        }
        let from = ctx.pages.remove(self.element);
        ctx.pages.insert_before(self.element, self.destination);

        self.scroll_delta = 0.0;
        if self.scroll {
            let to = ctx.pages.index_of(self.element);
            if let (Some(from), Some(to)) = (from, to) {
                let extent = ctx.ui.page_extent();
                self.scroll_delta = match to.cmp(&from) {
                    std::cmp::Ordering::Greater => extent,
                    std::cmp::Ordering::Less => -extent,
                    std::cmp::Ordering::Equal => 0.0,
                };
                ctx.ui.scroll_by(self.scroll_delta);
            }
        }
        Ok(())
    }

    async fn undo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        if self.destination == Some(self.element) {
            return Ok(());
        }

        ctx.pages.remove(self.element);
        let reference = self
            .original_index
            .and_then(|index| ctx.pages.child_at(index));
        ctx.pages.insert_before(self.element, reference);

        if self.scroll_delta != 0.0 {
            ctx.ui.scroll_by(-self.scroll_delta);
        }
        Ok(())
    }

    async fn redo(&mut self, ctx: &mut EditorContext) -> Result<()> {
        self.execute(ctx).await
    }
}
