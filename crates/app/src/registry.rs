use chrono::{Datelike, NaiveDate};
use tracing::info;

use atelier_cases::Case;
use atelier_catalog::CatalogArticle;
use atelier_parties::{Agent, Client, ClientId, Expert, Insurer, Supplier};
use atelier_store::{Collection, Warehouse};
use atelier_vehicles::Vehicle;
use rust_decimal::Decimal;

use crate::error::ServiceResult;

const CLIENT_CODE_WIDTH: usize = 5;

/// Registration of the directory records: clients, vehicles, suppliers,
/// insurers, experts, agents, catalog articles and case folders. Codes
/// and case numbers are drawn from the warehouse counters so they are
/// unique within a session.
#[derive(Clone)]
pub struct Registry {
    warehouse: Warehouse,
}

impl Registry {
    pub fn new(warehouse: Warehouse) -> Self {
        Self { warehouse }
    }

    pub fn register_client(
        &self,
        last_name: &str,
        first_name: &str,
    ) -> ServiceResult<Client> {
        let code = self
            .warehouse
            .counters
            .next_code("CL", CLIENT_CODE_WIDTH)?;
        let client = Client::new(code, last_name, first_name)?;
        self.warehouse.clients.insert(client.clone())?;
        info!(code = %client.code, "client registered");
        Ok(client)
    }

    pub fn register_vehicle(
        &self,
        registration: &str,
        make: &str,
        model: &str,
        client_id: ClientId,
    ) -> ServiceResult<Vehicle> {
        let vehicle = Vehicle::new(registration, make, model, client_id)?;
        self.warehouse.vehicles.insert(vehicle.clone())?;
        info!(registration = %vehicle.registration, "vehicle registered");
        Ok(vehicle)
    }

    pub fn register_supplier(&self, name: &str) -> ServiceResult<Supplier> {
        let supplier = Supplier::new(name)?;
        self.warehouse.suppliers.insert(supplier.clone())?;
        Ok(supplier)
    }

    pub fn register_insurer(&self, name: &str) -> ServiceResult<Insurer> {
        let insurer = Insurer::new(name)?;
        self.warehouse.insurers.insert(insurer.clone())?;
        Ok(insurer)
    }

    pub fn register_expert(&self, last_name: &str, first_name: &str) -> ServiceResult<Expert> {
        let expert = Expert::new(last_name, first_name)?;
        self.warehouse.experts.insert(expert.clone())?;
        Ok(expert)
    }

    pub fn register_agent(
        &self,
        last_name: &str,
        first_name: &str,
        company: Option<&str>,
    ) -> ServiceResult<Agent> {
        let mut agent = Agent::new(last_name, first_name)?;
        agent.company = company.map(str::to_string);
        self.warehouse.agents.insert(agent.clone())?;
        Ok(agent)
    }

    pub fn add_article(
        &self,
        description: &str,
        unit_price_ex_tax: Decimal,
    ) -> ServiceResult<CatalogArticle> {
        let article = CatalogArticle::new(description, unit_price_ex_tax)?;
        self.warehouse.articles.insert(article.clone())?;
        Ok(article)
    }

    /// Opens a new case folder, numbered within the opening year.
    pub fn open_case(&self, opened_on: NaiveDate) -> ServiceResult<Case> {
        let number = self
            .warehouse
            .counters
            .next_yearly("AFF", opened_on.year())?;
        let case = Case::new(number, opened_on)?;
        self.warehouse.cases.insert(case.clone())?;
        info!(number = %case.number, "case opened");
        Ok(case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_codes_are_sequential() {
        let registry = Registry::new(Warehouse::new());
        let first = registry.register_client("Alaoui", "Yasmine").unwrap();
        let second = registry.register_client("Bennis", "Omar").unwrap();
        assert_eq!(first.code, "CL00001");
        assert_eq!(second.code, "CL00002");
    }

    #[test]
    fn case_numbers_restart_each_year() {
        let registry = Registry::new(Warehouse::new());
        let in_2024 = registry
            .open_case(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .unwrap();
        let in_2025 = registry
            .open_case(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
            .unwrap();
        assert_eq!(in_2024.number, "AFF-2024-001");
        assert_eq!(in_2025.number, "AFF-2025-001");
    }
}
