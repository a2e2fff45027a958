use crate::model::{Category, Frequency, Task};

fn task(
    name: &str,
    minutes: u32,
    category: Category,
    frequency: Frequency,
    include: bool,
) -> Task {
    Task::new(name, minutes, category.label(), frequency, include)
}

/// First-run catalog: 24 tasks spanning all seven categories, inserted
/// only when the store is empty.
pub fn default_tasks() -> Vec<Task> {
    use Category::*;
    use Frequency::*;

    vec![
        task("Refrigerator Filter", 5, ApplianceMaintenance, EveryVisit, true),
        task("Dishwasher Cleaning", 12, ApplianceMaintenance, Annual, true),
        task("Stove Exhaust Filter Replacement", 15, ApplianceMaintenance, Annual, true),
        task("Dryer Vent Cleaning", 20, ApplianceMaintenance, Annual, true),
        task("Car Maintenance (Filters/Wipers/Air)", 30, AutoMaintenance, Annual, false),
        task("Exterior Door/Window Maintenance", 25, EnergyEfficiency, Annual, true),
        task("Thermal Imaging for Heat Loss", 15, EnergyEfficiency, Annual, true),
        task("Light Bulbs/Fan Switch", 8, EnergyEfficiency, EveryVisit, true),
        task("Thermal Imaging for AC Loss", 12, EnergyEfficiency, Annual, true),
        task("Drone Inspection", 15, EnergyEfficiency, AdHoc, false),
        task("Garage Door Tune Up", 30, HomeSafety, Annual, true),
        task("Smoke-CO Detector Batteries", 5, HomeSafety, EveryVisit, true),
        task("Attic/Basement/Crawl Inspection", 15, HomeSafety, Annual, true),
        task("Camera/Doorbell Inspection", 5, HomeSafety, Annual, true),
        task("Basic Gutter/Downspout Clearing", 25, HomeSafety, Annual, true),
        task("Air Filter Furnace", 5, Hvac, EveryVisit, true),
        task("AC Unit Check", 8, Hvac, Annual, true),
        task("Fall Prep", 40, Seasonal, Annual, true),
        task("Spring Prep", 20, Seasonal, Annual, true),
        task("Water Softener Salt Delivery/Refill", 8, Plumbing, EveryVisit, true),
        task("Whole House Water Filter Replacement", 10, Plumbing, Annual, true),
        task("Hot Water Heater Drain/Flush", 45, Plumbing, Annual, true),
        task("Drain/Trap Cleaning", 14, Plumbing, AdHoc, false),
        task("Shower/Tub/Faucet Descaling", 20, Plumbing, Annual, true),
    ]
}
