use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use linedet_image::Image;
use linedet_imgproc::{
    filter::{convolve, kernels},
    gradient::gradient,
};

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gaussian Convolution");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        for kernel_size in [3, 5, 7, 9].iter() {
            group.throughput(criterion::Throughput::Elements(
                (*width * *height * *kernel_size) as u64,
            ));

            let parameter_string = format!("{}x{}x{}", width, height, kernel_size);

            let image_data = (0..width * height).map(|i| (i % 255) as f64 / 255.0).collect();
            let image = Image::<f64, 1>::new([*width, *height].into(), image_data).unwrap();

            let kernel = kernels::gaussian_kernel_2d::<f64>(*kernel_size, 1.0).unwrap();

            group.bench_with_input(
                BenchmarkId::new("convolve_gaussian", &parameter_string),
                &(&image, &kernel),
                |b, i| b.iter(|| black_box(convolve(i.0, i.1))),
            );
        }
    }

    group.finish();
}

fn bench_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gradient");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_data = (0..width * height * 3)
            .map(|i| (i % 255) as f64 / 255.0)
            .collect();
        let image = Image::<f64, 3>::new([*width, *height].into(), image_data).unwrap();

        group.bench_with_input(
            BenchmarkId::new("gradient", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(gradient(i))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_filters, bench_gradient);
criterion_main!(benches);
