use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use git_safety_guard::analyze_command;
use git_safety_guard::shell::tokenize;

// Sample command lines covering each analyzer path
fn sample_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("unknown_exec", "ls -la /home/user/projects"),
        ("git_status", "git status --short"),
        ("git_push_force", "git push --force origin main"),
        ("git_push_lease", "git -C /repo push --force-with-lease=main:abc123 origin main"),
        ("git_clean_dry_run", "git clean -nd"),
        ("rm_tmp", "rm -rf /tmp/build /var/tmp/cache"),
        ("rm_root", "sudo -u root rm -rf /"),
        ("rm_tmpdir", "rm -rf \"$TMPDIR/work dir\""),
        ("wrapped", "sudo env FOO=1 nice -n 10 time command git reset --hard HEAD~1"),
        ("quoted_comment", "git commit -m 'fix: handle \"quotes\"' # trailing comment"),
    ]
}

fn bench_analyze_command(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_command");

    for (label, command) in sample_commands() {
        group.bench_with_input(BenchmarkId::new("command", label), command, |b, command| {
            b.iter(|| analyze_command(black_box(command)))
        });
    }

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for size in [10, 100, 1000] {
        let command = format!("rm -rf {}", "'/tmp/some dir'/x ".repeat(size));
        group.bench_with_input(BenchmarkId::new("targets", size), &command, |b, command| {
            b.iter(|| tokenize(black_box(command)))
        });
    }

    group.finish();
}

fn bench_long_rm(c: &mut Criterion) {
    let command = format!("rm -rf {}/etc", "/tmp/a/../b ".repeat(1000));

    c.bench_function("rm_many_targets", |b| {
        b.iter(|| analyze_command(black_box(&command)))
    });
}

criterion_group!(benches, bench_analyze_command, bench_tokenize, bench_long_rm);
criterion_main!(benches);
