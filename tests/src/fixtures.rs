use cloudrange_common::Source;
use cloudrange_core::store::MemoryStore;

pub const AZURE: &str = r#"{
    "changeNumber": 312,
    "cloud": "Public",
    "values": [
        {
            "name": "AzureCloud",
            "id": "AzureCloud",
            "properties": {
                "region": "",
                "platform": "Azure",
                "systemService": "",
                "addressPrefixes": ["13.64.0.0/11", "52.0.0.0/8"]
            }
        },
        {
            "name": "AzureCloud.westeurope",
            "id": "AzureCloud.westeurope",
            "properties": {
                "region": "westeurope",
                "platform": "Azure",
                "systemService": "",
                "addressPrefixes": ["13.69.0.0/17", "20.50.0.0/18"]
            }
        },
        {
            "name": "AzureStorage.eastus",
            "id": "AzureStorage.eastus",
            "properties": {
                "region": "eastus",
                "platform": "Azure",
                "systemService": "AzureStorage",
                "addressPrefixes": ["52.239.152.0/22"]
            }
        }
    ]
}"#;

pub const AMAZON: &str = r#"{
    "syncToken": "1700000000",
    "createDate": "2023-11-14-22-13-20",
    "prefixes": [
        {"ip_prefix": "52.239.152.0/24", "region": "us-east-1", "service": "AMAZON", "network_border_group": "us-east-1"},
        {"ip_prefix": "3.5.140.0/22", "region": "ap-northeast-2", "service": "S3", "network_border_group": "ap-northeast-2"},
        {"ip_prefix": "15.190.244.0/22", "region": "", "service": "AMAZON", "network_border_group": "GLOBAL"}
    ],
    "ipv6_prefixes": [
        {"ipv6_prefix": "2600:1f14::/35", "region": "us-west-2", "service": "AMAZON", "network_border_group": "us-west-2"}
    ]
}"#;

pub const GOOGLE: &str = r#"{
    "syncToken": "1700000000000",
    "creationTime": "2023-11-14T22:13:20.000000",
    "prefixes": [
        {"ipv4Prefix": "34.76.0.0/14", "service": "Google Cloud", "scope": "europe-west1"},
        {"ipv6Prefix": "2600:1900:4010::/44", "service": "Google Cloud", "scope": "europe-west1"},
        {"ipv4Prefix": "35.235.0.0/20", "service": "Google Cloud", "scope": "us-west2"}
    ]
}"#;

pub const ORACLE: &str = r#"{
    "last_updated_timestamp": "2023-11-14T22:13:20.000000",
    "regions": [
        {"region": "eu-frankfurt-1", "cidrs": [{"cidr": "130.61.0.0/16", "tags": ["OCI"]}]},
        {"region": "sa-bogota-1", "cidrs": [{"cidr": "150.230.0.0/18", "tags": ["OCI"]}]}
    ]
}"#;

pub fn store() -> MemoryStore {
    MemoryStore::new()
        .with(Source::Azure, AZURE)
        .with(Source::Amazon, AMAZON)
        .with(Source::Google, GOOGLE)
        .with(Source::Oracle, ORACLE)
}
