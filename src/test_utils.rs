use crate::dataset::{Dataset, LaunchRecord, Outcome};
use crate::models::*;

/// Launch data in the layout of the dashboard's CSV file, including columns the dashboard
/// ignores.
pub(crate) const LAUNCHES_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,1,500,F9 v1.1  B1003,v1.1
3,CCAFS SLC-40,1,2150,F9 FT B1021.1,FT
4,KSC LC-39A,1,5300,F9 FT B1031.1,FT
5,KSC LC-39A,0,3600,F9 B4 B1040.1,B4
6,VAFB SLC-4E,1,9600,F9 FT B1036.2,FT
";

/// Create the three record dataset used by the worked example of the two views.
pub(crate) fn get_test_dataset() -> Dataset {
    Dataset::new(vec![
        LaunchRecord::new("KSC LC-39A", 5000.0, Outcome::Success, "B4"),
        LaunchRecord::new("KSC LC-39A", 3000.0, Outcome::Failure, "B5"),
        LaunchRecord::new("VAFB SLC-4E", 9000.0, Outcome::Success, "B4"),
    ])
    .unwrap()
}

/// Create a dataset from [LAUNCHES_CSV].
pub(crate) fn get_csv_dataset() -> Dataset {
    Dataset::from_reader(LAUNCHES_CSV.as_bytes()).unwrap()
}

/// Create an UpdateRequest for a site dropdown change.
pub(crate) fn get_test_update_request() -> UpdateRequest {
    UpdateRequest {
        changed: vec![InputId::SiteDropdown],
        controls: Controls {
            site: SiteSelection::Site("KSC LC-39A".to_string()),
            payload_range: PayloadRange::new(2000.0, 8000.0),
        },
    }
}
