//! Pipeline-configuration template generation.
//!
//! Produces a CI/CD-pipeline-like YAML document with a variable number of
//! resources and jobs. Unlike the flat record schema, the shape itself is
//! randomized (resource kinds, step kinds, counts), which exercises
//! parsers on realistic nested and variadic documents.

use crate::faker;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const RESOURCE_KINDS: &[&str] = &["git", "s3", "registry-image", "time", "webhook"];
const STEP_KINDS: &[&str] = &["get", "put", "task"];
const AWS_REGIONS: &[&str] = &["us-east-1", "us-west-2", "eu-west-1", "ap-southeast-1"];

/// Generate a pipeline-configuration template with the given seed.
pub fn generate_template(seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_template_with_rng(&mut rng)
}

/// Generate a pipeline-configuration template using the given RNG.
pub fn generate_template_with_rng<R: Rng>(rng: &mut R) -> String {
    let mut doc = String::with_capacity(4096);

    doc.push_str("# Synthetic CI/CD pipeline configuration\n");
    doc.push_str(&format!("version: {}\n", rng.gen_range(1..=5)));
    doc.push_str("env:\n");
    doc.push_str(&format!("  GIT_AUTHOR_NAME: \"{}\"\n", faker::full_name(rng)));
    doc.push_str(&format!("  GIT_AUTHOR_EMAIL: \"{}\"\n", faker::email(rng)));
    doc.push_str("  API_KEY: ((secrets.api_key))\n");
    doc.push_str(&format!("  DEBUG: {}\n", rng.gen_bool(0.5)));

    doc.push_str("\nresources:\n");
    let resource_count = rng.gen_range(3..=10);
    let mut resource_names = Vec::with_capacity(resource_count);
    for i in 0..resource_count {
        let name = format!("{}-{}", faker::app_name(rng).to_lowercase(), i);
        let kind = RESOURCE_KINDS.choose(rng).copied().unwrap_or(RESOURCE_KINDS[0]);

        doc.push_str(&format!("- name: {name}\n"));
        doc.push_str(&format!("  type: {kind}\n"));
        doc.push_str("  source:\n");
        push_resource_source(&mut doc, rng, kind);

        resource_names.push(name);
    }

    doc.push_str("\njobs:\n");
    let job_count = rng.gen_range(2..=8);
    for i in 0..job_count {
        doc.push_str(&format!("- name: {}-service-{}\n", faker::word(rng), i));
        doc.push_str("  plan:\n");

        let step_count = rng.gen_range(2..=6);
        for _ in 0..step_count {
            let kind = STEP_KINDS.choose(rng).copied().unwrap_or(STEP_KINDS[0]);
            push_step(&mut doc, rng, kind, &resource_names);
        }
    }

    doc
}

fn push_resource_source<R: Rng>(doc: &mut String, rng: &mut R, kind: &str) {
    match kind {
        "git" => {
            doc.push_str(&format!(
                "    uri: git@github.com:{}/{}.git\n",
                faker::username(rng),
                faker::app_name(rng).to_lowercase(),
            ));
            doc.push_str(&format!("    branch: (({}.branch))\n", faker::word(rng)));
            doc.push_str(&format!("    private_key: ((secrets.{}_key))\n", faker::word(rng)));
        }
        "s3" => {
            doc.push_str(&format!("    bucket: (({}.bucket))\n", faker::word(rng)));
            doc.push_str("    access_key_id: ((secrets.aws_access_key))\n");
            doc.push_str("    secret_access_key: ((secrets.aws_secret_key))\n");
            let region = AWS_REGIONS.choose(rng).copied().unwrap_or(AWS_REGIONS[0]);
            doc.push_str(&format!("    region_name: {region}\n"));
        }
        "registry-image" => {
            doc.push_str(&format!(
                "    repository: {}/{}\n",
                faker::username(rng),
                faker::app_name(rng).to_lowercase(),
            ));
            doc.push_str(&format!("    tag: (({}.version))\n", faker::word(rng)));
            doc.push_str("    username: ((secrets.registry_username))\n");
            doc.push_str("    password: ((secrets.registry_password))\n");
        }
        "time" => {
            doc.push_str(&format!("    interval: {}m\n", rng.gen_range(5..=60)));
        }
        _ => {
            // webhook
            doc.push_str(&format!(
                "    uri: https://hooks.example.com/{}/{}\n",
                faker::word(rng),
                faker::word(rng),
            ));
        }
    }
}

fn push_step<R: Rng>(doc: &mut String, rng: &mut R, kind: &str, resources: &[String]) {
    let fallback = "missing-resource".to_string();
    let resource = resources.choose(rng).unwrap_or(&fallback);

    match kind {
        "get" => {
            doc.push_str(&format!("  - get: {resource}\n"));
            doc.push_str(&format!("    trigger: {}\n", rng.gen_bool(0.5)));
        }
        "put" => {
            doc.push_str(&format!("  - put: {resource}\n"));
            doc.push_str("    params:\n");
            doc.push_str(&format!("      file: {}.tar.gz\n", faker::word(rng)));
        }
        _ => {
            // task
            doc.push_str(&format!(
                "  - task: {}-{}\n",
                faker::word(rng),
                faker::word(rng),
            ));
            doc.push_str(&format!(
                "    file: (({}.path))/tasks/{}.yml\n",
                faker::word(rng),
                faker::word(rng),
            ));
            doc.push_str("    params:\n");
            doc.push_str(&format!("      ENV: (({}.env))\n", faker::word(rng)));
            doc.push_str(&format!("      DEBUG: (({}.debug))\n", faker::word(rng)));
            doc.push_str(&format!("      TIMEOUT: {}\n", rng.gen_range(30..=600)));
        }
    }
}
