use std::collections::BTreeSet;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::fixtures::leads::sample_leads;
use crate::models::{Channel, Lead, LeadStatus};
use crate::simulation::state::SimulationState;
use crate::simulation::SimulationEvent;

pub type AppSignal = Signal<AppState>;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
}

impl LeadFilters {
    pub fn clear(&mut self) {
        self.channel = None;
        self.status = None;
    }

    pub fn matches(&self, lead: &Lead) -> bool {
        self.channel.map_or(true, |channel| lead.channel == channel)
            && self.status.map_or(true, |status| lead.status == status)
    }
}

/// 首页表格只搜姓名，线索页同时搜邮箱。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchScope {
    Name,
    NameOrEmail,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryState {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub filters: LeadFilters,
    #[serde(default)]
    pub selected: BTreeSet<String>,
}

impl DirectoryState {
    pub fn clear(&mut self) {
        self.search.clear();
        self.filters.clear();
        self.selected.clear();
    }

    pub fn toggle(&mut self, lead_id: &str) {
        if !self.selected.remove(lead_id) {
            self.selected.insert(lead_id.to_string());
        }
    }

    /// Selects every visible row, or deselects them all when they are already selected.
    pub fn toggle_all(&mut self, visible_ids: &[String]) {
        let all_selected = !visible_ids.is_empty()
            && visible_ids.iter().all(|id| self.selected.contains(id));
        if all_selected {
            for id in visible_ids {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(visible_ids.iter().cloned());
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperationState {
    pub context: Option<String>,
    pub last_message: Option<String>,
    pub error: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeadStats {
    pub total: usize,
    pub active: usize,
    pub vip: usize,
    pub revenue: u64,
}

impl LeadStats {
    pub fn from_leads(leads: &[Lead]) -> Self {
        leads.iter().fold(Self::default(), |mut stats, lead| {
            stats.total += 1;
            match lead.status {
                LeadStatus::Active => stats.active += 1,
                LeadStatus::Vip => stats.vip += 1,
                _ => {}
            }
            stats.revenue += u64::from(lead.total_spent);
            stats
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub logged_in: bool,
    pub leads: Vec<Lead>,
    pub directory: DirectoryState,
    pub simulation: SimulationState,
    pub operation: OperationState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            logged_in: false,
            leads: sample_leads(),
            directory: DirectoryState::default(),
            simulation: SimulationState::default(),
            operation: OperationState::default(),
        }
    }
}

impl AppState {
    pub fn with_login(logged_in: bool) -> Self {
        Self {
            logged_in,
            ..Self::default()
        }
    }

    pub fn visible_leads(&self, scope: SearchScope) -> Vec<&Lead> {
        filter_leads(&self.leads, &self.directory, scope)
    }

    pub fn find_lead(&self, lead_id: &str) -> Option<&Lead> {
        self.leads.iter().find(|lead| lead.id == lead_id)
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        self.directory.clear();
        self.simulation = SimulationState::default();
    }

    pub fn reset_leads(&mut self) {
        self.leads = sample_leads();
        self.directory.selected.clear();
    }

    /// 折叠驱动事件；线索被标记为 Engaged 时同步回目录。
    pub fn apply_simulation_event(&mut self, event: &SimulationEvent) {
        if let SimulationEvent::LeadEngaged { lead_id } = event {
            if let Some(lead) = self.leads.iter_mut().find(|lead| &lead.id == lead_id) {
                lead.status = LeadStatus::Engaged;
            }
        }
        self.simulation.apply(event);
    }
}

pub fn filter_leads<'a>(
    leads: &'a [Lead],
    directory: &DirectoryState,
    scope: SearchScope,
) -> Vec<&'a Lead> {
    let needle = directory.search.trim().to_lowercase();
    leads
        .iter()
        .filter(|lead| directory.filters.matches(lead))
        .filter(|lead| {
            if needle.is_empty() {
                return true;
            }
            lead.name.to_lowercase().contains(&needle)
                || (scope == SearchScope::NameOrEmail
                    && lead.email.to_lowercase().contains(&needle))
        })
        .collect()
}

/// `ID1,ID2` in directory order, or `None` when nothing is selected.
pub fn selection_query(leads: &[Lead], selected: &BTreeSet<String>) -> Option<String> {
    let ids: Vec<&str> = leads
        .iter()
        .filter(|lead| selected.contains(&lead.id))
        .map(|lead| lead.id.as_str())
        .collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids.join(","))
    }
}

/// Resolves a comma separated id list against the directory, keeping directory order.
pub fn resolve_selection(leads: &[Lead], query: &str) -> Vec<Lead> {
    let wanted: BTreeSet<&str> = query
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();
    leads
        .iter()
        .filter(|lead| wanted.contains(lead.id.as_str()))
        .cloned()
        .collect()
}

#[derive(Clone, Copy)]
pub struct AppActions {
    state: AppSignal,
}

impl AppActions {
    pub fn new(state: AppSignal) -> Self {
        Self { state }
    }

    fn update(&self, f: impl FnOnce(&mut AppState)) {
        let mut signal = self.state;
        signal.with_mut(f);
    }

    pub fn set_logged_in(&self, logged_in: bool) {
        self.update(|state| state.logged_in = logged_in);
    }

    pub fn logout(&self) {
        self.update(AppState::logout);
    }

    pub fn set_search(&self, search: String) {
        self.update(|state| state.directory.search = search);
    }

    pub fn set_channel_filter(&self, channel: Option<Channel>) {
        self.update(|state| state.directory.filters.channel = channel);
    }

    pub fn set_status_filter(&self, status: Option<LeadStatus>) {
        self.update(|state| state.directory.filters.status = status);
    }

    pub fn toggle_lead(&self, lead_id: &str) {
        self.update(|state| state.directory.toggle(lead_id));
    }

    pub fn toggle_all(&self, visible_ids: &[String]) {
        self.update(|state| state.directory.toggle_all(visible_ids));
    }

    pub fn reset_leads(&self) {
        self.update(AppState::reset_leads);
    }

    pub fn reset_simulation(&self) {
        self.update(|state| state.simulation = SimulationState::default());
    }

    pub fn apply_simulation_event(&self, event: &SimulationEvent) {
        self.update(|state| state.apply_simulation_event(event));
    }

    pub fn notify_success(&self, context: impl Into<String>, message: impl Into<String>) {
        let (context, message) = (context.into(), message.into());
        self.update(|state| {
            state.operation = OperationState {
                context: Some(context),
                last_message: Some(message),
                error: None,
            };
        });
    }

    pub fn notify_error(&self, context: impl Into<String>, message: impl Into<String>) {
        let (context, message) = (context.into(), message.into());
        self.update(|state| {
            state.operation = OperationState {
                context: Some(context),
                last_message: None,
                error: Some(message),
            };
        });
    }

    pub fn clear_operation_status(&self) {
        self.update(|state| state.operation = OperationState::default());
    }
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    AppActions::new(use_app_state())
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn ids(leads: &[&Lead]) -> Vec<String> {
        leads.iter().map(|lead| lead.id.clone()).collect()
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut state = AppState::default();
        state.directory.search = "EMMA".into();
        let visible = state.visible_leads(SearchScope::Name);
        assert_eq!(ids(&visible), vec!["CUST-0001"]);
    }

    #[test]
    fn email_search_only_on_leads_page() {
        let mut state = AppState::default();
        let email = state.leads[1].email.clone();
        state.directory.search = email;
        assert!(state.visible_leads(SearchScope::Name).is_empty());
        assert_eq!(
            ids(&state.visible_leads(SearchScope::NameOrEmail)),
            vec![state.leads[1].id.clone()]
        );
    }

    #[test]
    fn filters_combine() {
        let mut state = AppState::default();
        state.directory.filters.status = Some(LeadStatus::Dormant);
        assert_eq!(
            ids(&state.visible_leads(SearchScope::Name)),
            vec!["CUST-0005", "CUST-0006"]
        );
        state.directory.filters.channel = Some(Channel::Phone);
        assert_eq!(
            ids(&state.visible_leads(SearchScope::Name)),
            vec!["CUST-0005"]
        );
    }

    #[test]
    fn select_all_toggles_over_visible_rows() {
        let mut directory = DirectoryState::default();
        directory.toggle("CUST-0009");
        let visible = vec!["CUST-0001".to_string(), "CUST-0002".to_string()];

        directory.toggle_all(&visible);
        assert_eq!(directory.selected.len(), 3);

        directory.toggle_all(&visible);
        assert_eq!(
            directory.selected.iter().collect::<Vec<_>>(),
            vec!["CUST-0009"]
        );
    }

    #[test]
    fn selection_query_follows_directory_order() {
        let leads = sample_leads();
        let mut selected = BTreeSet::new();
        assert_eq!(selection_query(&leads, &selected), None);
        selected.insert("CUST-0004".to_string());
        selected.insert("CUST-0002".to_string());
        assert_eq!(
            selection_query(&leads, &selected).as_deref(),
            Some("CUST-0002,CUST-0004")
        );
    }

    #[test]
    fn resolve_ignores_unknown_ids() {
        let leads = sample_leads();
        let resolved = resolve_selection(&leads, "CUST-0003, nope,,CUST-0001");
        let ids: Vec<_> = resolved.iter().map(|lead| lead.id.as_str()).collect();
        assert_eq!(ids, vec!["CUST-0001", "CUST-0003"]);
        assert!(resolve_selection(&leads, "").is_empty());
    }

    #[test]
    fn stats_count_statuses_and_revenue() {
        let leads = sample_leads();
        let stats = LeadStats::from_leads(&leads);
        assert_eq!(stats.total, leads.len());
        assert_eq!(
            stats.active,
            leads.iter().filter(|l| l.status == LeadStatus::Active).count()
        );
        assert_eq!(stats.vip, 1);
        let revenue: u64 = leads.iter().map(|l| u64::from(l.total_spent)).sum();
        assert_eq!(stats.revenue, revenue);
    }

    #[test]
    fn logout_clears_directory_state() {
        let mut state = AppState::with_login(true);
        state.directory.search = "x".into();
        state.directory.filters.channel = Some(Channel::Store);
        state.directory.toggle("CUST-0001");
        state.logout();
        assert!(!state.logged_in);
        assert_eq!(state.directory, DirectoryState::default());
    }

    #[test]
    fn engaged_leads_are_written_back() {
        let mut state = AppState::default();
        state.apply_simulation_event(&SimulationEvent::RunStarted {
            run_id: Uuid::nil(),
            total: 1,
        });
        state.apply_simulation_event(&SimulationEvent::LeadEngaged {
            lead_id: "CUST-0005".into(),
        });
        assert_eq!(
            state.find_lead("CUST-0005").map(|lead| lead.status),
            Some(LeadStatus::Engaged)
        );
        assert_eq!(state.simulation.engaged, vec!["CUST-0005".to_string()]);
    }

    #[test]
    fn reset_restores_fixtures() {
        let mut state = AppState::default();
        state.leads[0].status = LeadStatus::Engaged;
        state.directory.toggle("CUST-0001");
        state.reset_leads();
        assert_eq!(state.leads, sample_leads());
        assert!(state.directory.selected.is_empty());
    }
}
