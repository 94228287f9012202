//! AWS region handling for Bedrock
//!
//! Known Bedrock regions and the per-region endpoint hosts for the control
//! plane (`bedrock`) and the data plane (`bedrock-runtime`).

/// AWS regions known to host Bedrock
pub const AWS_REGIONS: &[&str] = &[
    // US regions
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    // EU regions
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "eu-central-1",
    "eu-central-2",
    "eu-north-1",
    "eu-south-1",
    "eu-south-2",
    // Asia Pacific regions
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-southeast-5",
    // Other regions
    "ca-central-1",
    "sa-east-1",
    "us-gov-west-1",
    "us-gov-east-1",
];

pub fn is_known_region(region: &str) -> bool {
    AWS_REGIONS.contains(&region)
}

/// Base URL of the control-plane endpoint for a region
pub fn control_plane_base(region: &str) -> String {
    format!("https://bedrock.{}.amazonaws.com", region)
}

/// Base URL of the data-plane endpoint for a region
pub fn runtime_base(region: &str) -> String {
    format!("https://bedrock-runtime.{}.amazonaws.com", region)
}
