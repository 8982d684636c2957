use super::delegate::RowDelegate;
use super::model::Browser;
use crate::key::{short_help_line, KeyMap};
use crate::paginator;
use crate::query::ListRecord;

impl<R: ListRecord, D: RowDelegate<R>> Browser<R, D> {
    /// Renders the header, the current page's rows (or an empty-state line),
    /// the pagination bar and a one-line help.
    ///
    /// The pagination bar is left out when everything fits on one page.
    pub fn view(&self) -> String {
        let title = format!("{} · {}", self.title, self.network.name());
        let mut sections = vec![self.styles.title.render(&title), self.summary_view()];
        sections.push(String::new());
        sections.push(self.rows_view());
        if paginator::should_render(self.paginator.total_pages) {
            sections.push(String::new());
            sections.push(self.paginator.view());
        }
        if let Some(message) = &self.status_message {
            sections.push(self.styles.status_message.render(message));
        }
        sections.push(String::new());
        sections.push(self.help_view());
        sections.join("\n")
    }

    fn count_label(&self, n: usize) -> String {
        let (one, many) = self.delegate.noun();
        format!("{} {}", n, if n == 1 { one } else { many })
    }

    fn summary_view(&self) -> String {
        if self.searching {
            return self
                .styles
                .search_prompt
                .render(&format!("search: {}▏", self.query.search));
        }

        let mut parts = vec![
            self.count_label(self.visible.len()),
            format!("sort: {}", self.query.sort.label()),
            format!("status: {}", self.query.status),
        ];
        if self.query.mine_only {
            parts.push("mine only".to_string());
        }
        if !self.query.search.is_empty() {
            parts.push(format!("search: \"{}\"", self.query.search));
        }
        self.styles.summary.render(&parts.join(" · "))
    }

    fn rows_view(&self) -> String {
        if self.visible.is_empty() {
            let (_, many) = self.delegate.noun();
            let text = if self.records.is_empty() {
                format!("No {many} yet.")
            } else {
                format!("No {many} match your filters.")
            };
            return self.styles.empty.render(&text);
        }

        self.page_items()
            .iter()
            .enumerate()
            .map(|(i, record)| self.delegate.render(record, i == self.cursor, self.width))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn help_view(&self) -> String {
        let line = if self.searching {
            short_help_line(&[&self.keymap.accept_search, &self.keymap.clear_search])
        } else {
            let mut bindings = self.paginator.keymap.short_help();
            bindings.extend(self.keymap.short_help());
            short_help_line(&bindings)
        };
        self.styles.help.render(&line)
    }
}
