// File: crates/dashboard-shell/src/navigation.rs
// Summary: Two-view navigation (client list, client detail) rendered into a container.

use chart_core::{Chart, ChartConfig, Container, Element};
use tracing::{debug, info};

use crate::client::Client;
use crate::error::ShellError;
use crate::source::DataSource;

pub const BACK_LABEL: &str = "Back";
pub const CHART_HEADING: &str = "CPU Usage";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    ClientList,
    ClientDetail(u64),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellState {
    /// Clients from the most recent list refresh.
    pub clients: Vec<Client>,
    pub view: View,
}

impl Default for ShellState {
    fn default() -> Self {
        Self { clients: Vec::new(), view: View::ClientList }
    }
}

/// Owns the data source and chart; the host owns the container and passes it in.
pub struct Shell<D: DataSource> {
    source: D,
    chart: Chart,
    state: ShellState,
}

impl<D: DataSource> Shell<D> {
    pub fn new(source: D, config: ChartConfig) -> Self {
        Self { source, chart: Chart::new(config), state: ShellState::default() }
    }

    pub fn state(&self) -> &ShellState { &self.state }

    pub fn client(&self, id: u64) -> Option<&Client> {
        self.state.clients.iter().find(|c| c.id == id)
    }

    /// Fetch the client list and replace the container content with one entry per client.
    pub async fn refresh_clients(&mut self, container: &mut Container) -> Result<(), ShellError> {
        let clients = self.source.list_clients().await?;
        info!(clients = clients.len(), "client list refreshed");

        container.clear();
        for c in &clients {
            container.append(Element::new("div", c.address.as_str()).with_class("client").with_href(c.detail_href()));
        }
        self.state = ShellState { clients, view: View::ClientList };
        Ok(())
    }

    /// Show one client's detail: back control, headings and its CPU chart.
    ///
    /// The container is cleared before the fetch, so a failed fetch leaves it empty.
    pub async fn select_client(&mut self, id: u64, container: &mut Container) -> Result<(), ShellError> {
        let client = self.client(id).cloned().ok_or(ShellError::UnknownClient(id))?;

        container.clear();
        let mut samples = self.source.get_samples(id).await?;
        debug!(client = id, samples = samples.len(), "samples fetched");

        container.append(Element::new("button", BACK_LABEL).with_href("index.html"));
        container.append(Element::new("h2", client.address.as_str()));
        container.append(Element::new("h3", CHART_HEADING));

        // hub stores newest first
        samples.reverse();
        self.chart.render_into(&samples, container);
        self.state.view = View::ClientDetail(id);
        Ok(())
    }

    /// Leave the detail view by refreshing the client list.
    pub async fn back(&mut self, container: &mut Container) -> Result<(), ShellError> {
        self.refresh_clients(container).await
    }
}
